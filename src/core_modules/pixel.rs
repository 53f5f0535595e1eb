// THEORY:
// The `Pixel` module is the most fundamental building block of the outline extractor.
// A `Pixel` here is not a color: by the time one exists, its color has already been
// collapsed into a single binary decision, background or foreground. What remains is
// the pixel's position on the grid and that immutable classification.
//
// Key principles:
// 1.  **Classify once**: The brightness test runs exactly once, when the grid is
//     built. Everything downstream (boundary checks, traversal, export) only reads
//     the resulting flag.
// 2.  **Near-white is background**: A pixel is background only when *every* channel
//     is above `BACKGROUND_THRESHOLD`. Any darker channel, even a single saturated
//     hue on white paper, makes it foreground ink.
// 3.  **Dumb data container**: `Pixel` knows nothing about its neighbours. Spatial
//     questions belong to `pixel_grid` and `boundary`.

pub mod pixel {
    pub type Byte = u8;
    pub type Channel = Byte;
    pub type Rgb = [Channel; 3];
    pub type Coordinate = u32;

    /// Channels strictly above this value count as "white".
    pub const BACKGROUND_THRESHOLD: Channel = 250;

    pub const RGB_CHANNELS: usize = 3;
    pub const RGBA_CHANNELS: usize = 4;

    /// A classified grid cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Pixel {
        pub x: Coordinate,
        pub y: Coordinate,
        pub is_background: bool,
    }

    impl Pixel {
        pub fn new(x: Coordinate, y: Coordinate, rgb: Rgb) -> Self {
            Pixel {
                x,
                y,
                is_background: is_background_color(rgb),
            }
        }

        pub fn is_foreground(&self) -> bool {
            !self.is_background
        }
    }

    /// Returns true when all three channels exceed `BACKGROUND_THRESHOLD`.
    pub fn is_background_color(rgb: Rgb) -> bool {
        rgb.iter().all(|&channel| channel > BACKGROUND_THRESHOLD)
    }

    /// Reads the leading RGB channels from a 3- or 4-byte slice.
    /// Callers only hand in slices produced by `chunks_exact`, so the length is known.
    pub fn rgb_from_bytes(bytes: &[Byte]) -> Rgb {
        [bytes[0], bytes[1], bytes[2]]
    }
}

#[cfg(test)]
mod tests {
    use super::pixel::*;

    #[test]
    fn pure_white_is_background() {
        assert!(is_background_color([255, 255, 255]));
        assert!(Pixel::new(0, 0, [251, 251, 251]).is_background);
    }

    #[test]
    fn threshold_itself_is_foreground() {
        // 250 is not *above* the threshold.
        assert!(!is_background_color([250, 255, 255]));
        assert!(!is_background_color([255, 250, 255]));
        assert!(!is_background_color([255, 255, 250]));
    }

    #[test]
    fn one_dark_channel_makes_ink() {
        let red = Pixel::new(3, 4, [255, 0, 0]);
        assert!(red.is_foreground());
        assert_eq!((red.x, red.y), (3, 4));
    }

    #[test]
    fn rgba_bytes_drop_alpha() {
        assert_eq!(rgb_from_bytes(&[1, 2, 3, 4]), [1, 2, 3]);
        assert_eq!(rgb_from_bytes(&[9, 8, 7]), [9, 8, 7]);
    }
}
