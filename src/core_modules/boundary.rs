// THEORY:
// A boundary pixel is a foreground pixel that touches "outside": a background pixel,
// or the edge of the image, in any of its 8 directions. The set of boundary pixels is
// exactly the outline ring of every shape, which is what a plotter needs to draw.
//
// The classification is pure and cheap, so it is evaluated on demand while tracing
// instead of being precomputed for the whole image. Only pixels the traversal
// actually reaches ever get asked.
//
// `NEIGHBOR_OFFSETS` is the single source of truth for neighbour order. The extractor
// walks it in this exact sequence, which is what makes traced outlines reproducible.

use crate::core_modules::pixel_grid::PixelGrid;

/// The 8-connected neighbourhood as `(dx, dy)`, in the fixed visiting order.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Returns true when `(x, y)` is foreground and at least one of its 8 neighbours is
/// background or lies outside the grid. Out-of-bounds pixels are never boundary pixels.
pub fn is_boundary(grid: &PixelGrid, x: i64, y: i64) -> bool {
    match grid.get(x, y) {
        Some(pixel) if pixel.is_foreground() => NEIGHBOR_OFFSETS.iter().any(|(dx, dy)| {
            grid.get(x + dx, y + dy)
                .is_none_or(|neighbor| neighbor.is_background)
        }),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::pixel::pixel::Rgb;

    const WHITE: Rgb = [255, 255, 255];
    const INK: Rgb = [0, 0, 0];

    /// Parses a picture where `#` is ink and anything else is paper.
    fn grid_from(picture: &[&str]) -> PixelGrid {
        let height = picture.len() as u32;
        let width = picture.first().map_or(0, |row| row.len()) as u32;
        let colors: Vec<Rgb> = picture
            .iter()
            .flat_map(|row| row.chars().map(|c| if c == '#' { INK } else { WHITE }))
            .collect();
        PixelGrid::from_rgb_triples(&colors, width, height).unwrap()
    }

    #[test]
    fn background_is_never_boundary() {
        let grid = grid_from(&["...", "...", "..."]);
        for y in 0..3 {
            for x in 0..3 {
                assert!(!is_boundary(&grid, x, y));
            }
        }
    }

    #[test]
    fn interior_of_a_solid_block_is_not_boundary() {
        let grid = grid_from(&[".....", ".###.", ".###.", ".###.", "....."]);
        assert!(!is_boundary(&grid, 2, 2));
        assert!(is_boundary(&grid, 1, 1));
        assert!(is_boundary(&grid, 2, 1));
        assert!(is_boundary(&grid, 3, 3));
    }

    #[test]
    fn diagonal_background_counts() {
        // (1, 1) only sees paper at its bottom-right diagonal.
        let grid = grid_from(&["###", "###", "##."]);
        assert!(is_boundary(&grid, 1, 1));
    }

    #[test]
    fn image_edge_counts_as_background() {
        let grid = grid_from(&["###", "###", "###"]);
        assert!(is_boundary(&grid, 0, 0));
        assert!(is_boundary(&grid, 1, 0));
        assert!(is_boundary(&grid, 2, 2));
        assert!(!is_boundary(&grid, 1, 1));
    }

    #[test]
    fn out_of_bounds_queries_are_false() {
        let grid = grid_from(&["#"]);
        assert!(is_boundary(&grid, 0, 0));
        assert!(!is_boundary(&grid, -1, 0));
        assert!(!is_boundary(&grid, 0, 1));
    }
}
