// THEORY:
// A `Body` is one traced outline: a maximal 8-connected run of boundary pixels,
// recorded in the order the traversal first claimed them. It is the unit a plotter
// draws without lifting the pen.
//
// Key architectural principles:
// 1.  **Ordered, not just a set**: `points` is a path. Its order comes from the
//     deterministic stack traversal, and the simplifier and exporters both rely on it.
// 2.  **Disjoint by construction**: Two bodies never share a pixel. The extractor's
//     visited bitmap guarantees this, so a `Body` does not need to check it.
// 3.  **Snapshot metadata**: `id`, `seed` and `bounding_box` describe the outline as
//     it was traced. Simplification only thins `points`; it never changes them.

use crate::core_modules::pixel::pixel::Coordinate;

/// A 2D grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Point {
    pub fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }

    /// True 2D Euclidean distance.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<Point> for (Coordinate, Coordinate) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// One connected outline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    /// Discovery index within its extraction pass. Not persistent.
    pub id: usize,
    /// The pixel that started the traversal; always the first traced point.
    pub seed: Point,
    /// Top-left and bottom-right corners enclosing every traced point, inclusive.
    pub bounding_box: (Point, Point),
    /// Outline points in traversal order. Thinned in place by simplification.
    pub points: Vec<Point>,
}

impl Body {
    /// Starts a body with its seed as the first point.
    pub fn new(id: usize, seed: Point) -> Self {
        Self {
            id,
            seed,
            bounding_box: (seed, seed),
            points: vec![seed],
        }
    }

    /// Appends a traced point and grows the bounding box.
    pub fn push(&mut self, point: Point) {
        let (min, max) = &mut self.bounding_box;
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
