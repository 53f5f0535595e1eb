// THEORY:
// The `OutlineExporter` is the last, read-only stage. It flattens the body list into
// the plain coordinate streams a plotter or renderer consumes. It never mutates a
// body and never allocates per point: every export is a lazy iterator borrowed from
// the bodies, so it can be restarted (by calling again or cloning) as often as needed.
//
// Two shapes are offered:
// - `raw_coords`: one continuous run of `(x, y)` pairs, body after body.
// - `coords_with_breaks`: the same run with a `Break` sentinel between consecutive
//   bodies, telling the consumer to lift the pen.

use std::fmt;

use crate::core_modules::body::Body;
use crate::core_modules::pixel::pixel::Coordinate;

/// One element of a pen path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathElement {
    Coord(Coordinate, Coordinate),
    /// Pen-lift between two bodies.
    Break,
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::Coord(x, y) => write!(f, "{x},{y}"),
            PathElement::Break => f.write_str("BREAK"),
        }
    }
}

/// Every body's points in discovery order, with no separators.
pub fn raw_coords(
    bodies: &[Body],
) -> impl Iterator<Item = (Coordinate, Coordinate)> + Clone + '_ {
    bodies
        .iter()
        .flat_map(|body| body.points.iter().map(|p| (p.x, p.y)))
}

/// Like `raw_coords`, with a `Break` between each pair of consecutive bodies.
pub fn coords_with_breaks(bodies: &[Body]) -> impl Iterator<Item = PathElement> + Clone + '_ {
    bodies.iter().enumerate().flat_map(|(i, body)| {
        let separator = (i > 0).then_some(PathElement::Break);
        separator.into_iter().chain(
            body.points
                .iter()
                .map(|p| PathElement::Coord(p.x, p.y)),
        )
    })
}

/// One owned coordinate run per body.
pub fn polylines(bodies: &[Body]) -> Vec<Vec<(Coordinate, Coordinate)>> {
    bodies
        .iter()
        .map(|body| body.points.iter().map(|&p| p.into()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::body::Point;

    fn body_of(id: usize, coords: &[(u32, u32)]) -> Body {
        let mut points = coords.iter().map(|&(x, y)| Point::new(x, y));
        let mut body = Body::new(id, points.next().unwrap());
        for p in points {
            body.push(p);
        }
        body
    }

    #[test]
    fn no_bodies_means_empty_exports() {
        let bodies: Vec<Body> = Vec::new();
        assert_eq!(raw_coords(&bodies).count(), 0);
        assert_eq!(coords_with_breaks(&bodies).count(), 0);
        assert!(polylines(&bodies).is_empty());
    }

    #[test]
    fn single_body_has_no_break() {
        let bodies = vec![body_of(0, &[(1, 1), (2, 1)])];
        let elements: Vec<PathElement> = coords_with_breaks(&bodies).collect();
        assert_eq!(
            elements,
            vec![PathElement::Coord(1, 1), PathElement::Coord(2, 1)]
        );
    }

    #[test]
    fn breaks_sit_between_bodies_only() {
        let bodies = vec![
            body_of(0, &[(0, 0), (1, 0)]),
            body_of(1, &[(5, 5)]),
            body_of(2, &[(8, 1), (8, 2)]),
        ];

        let raw: Vec<(u32, u32)> = raw_coords(&bodies).collect();
        assert_eq!(raw, vec![(0, 0), (1, 0), (5, 5), (8, 1), (8, 2)]);

        let elements: Vec<PathElement> = coords_with_breaks(&bodies).collect();
        assert_eq!(
            elements,
            vec![
                PathElement::Coord(0, 0),
                PathElement::Coord(1, 0),
                PathElement::Break,
                PathElement::Coord(5, 5),
                PathElement::Break,
                PathElement::Coord(8, 1),
                PathElement::Coord(8, 2),
            ]
        );
    }

    #[test]
    fn exports_are_restartable() {
        let bodies = vec![body_of(0, &[(3, 4), (4, 4)]), body_of(1, &[(9, 9)])];
        let coords = raw_coords(&bodies);
        let first: Vec<_> = coords.clone().collect();
        let second: Vec<_> = coords.collect();
        assert_eq!(first, second);

        let a: Vec<_> = coords_with_breaks(&bodies).collect();
        let b: Vec<_> = coords_with_breaks(&bodies).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn polylines_keep_bodies_apart() {
        let bodies = vec![body_of(0, &[(0, 0), (1, 1)]), body_of(1, &[(7, 7)])];
        assert_eq!(polylines(&bodies), vec![vec![(0, 0), (1, 1)], vec![(7, 7)]]);
    }

    #[test]
    fn elements_print_for_text_consumers() {
        assert_eq!(PathElement::Coord(12, 3).to_string(), "12,3");
        assert_eq!(PathElement::Break.to_string(), "BREAK");
    }
}
