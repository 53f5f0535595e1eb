// THEORY:
// The `BodyExtractor` is the engine of the outline extractor. It turns a classified
// `PixelGrid` into a list of `Body` outlines, one per connected ring of boundary
// pixels.
//
// Key architectural principles & algorithm steps:
// 1.  **Row-major seeding**: The grid is scanned top-to-bottom, left-to-right. The
//     first boundary pixel that no body has claimed yet becomes the seed of a new
//     body. Body discovery order is therefore the scan order.
// 2.  **Explicit work-stack**: Each body is grown with a heap-allocated LIFO stack, not
//     native recursion. The stack holds at most one entry per pixel, so a huge shape
//     costs memory proportional to its outline and never overflows a call stack.
// 3.  **Claim on discovery**: A pixel is claimed (marked visited and appended to the
//     body) the moment it is first seen as a neighbour, not when it is popped.
//     Neighbours are examined and pushed in `NEIGHBOR_OFFSETS` order. Together these
//     two rules fix the member order of every body, run after run.
// 4.  **Outline only**: The traversal only moves through pixels that are themselves
//     boundary pixels. A solid shape therefore yields its ring, never its interior.
// 5.  **Single writer**: The visited bitmap is written at most once per pixel. This
//     is what keeps bodies pairwise disjoint.
// 6.  **Cooperative cancellation**: A `CancelToken` is polled once per stack pop, so a
//     long trace over a large image can be abandoned promptly.

use crate::core_modules::body::{Body, Point};
use crate::core_modules::boundary::{NEIGHBOR_OFFSETS, is_boundary};
use crate::core_modules::cancel::CancelToken;
use crate::core_modules::pixel_grid::PixelGrid;

pub mod body_extractor {
    use super::*;
    use crate::error::SketchError;
    use log::{debug, trace};

    /// Traces every body in the grid. Never fails on a well-formed grid.
    pub fn find_bodies(grid: &PixelGrid) -> Vec<Body> {
        // A stop check that always answers "no" cannot abort the scan.
        trace_all(grid, || false).unwrap_or_default()
    }

    /// Like `find_bodies`, but gives up with `SketchError::Cancelled` once `cancel` is set.
    pub fn find_bodies_with_cancel(
        grid: &PixelGrid,
        cancel: &CancelToken,
    ) -> Result<Vec<Body>, SketchError> {
        trace_all(grid, || cancel.is_cancelled()).ok_or(SketchError::Cancelled)
    }

    /// The outer row-major scan. Returns `None` if `should_stop` fired.
    fn trace_all(grid: &PixelGrid, should_stop: impl Fn() -> bool) -> Option<Vec<Body>> {
        let mut visited = VisitedMap::new(grid.len());
        let mut stack: Vec<(i64, i64)> = Vec::new();
        let mut bodies: Vec<Body> = Vec::new();

        for (index, pixel) in grid.pixels().iter().enumerate() {
            if pixel.is_background || visited.is_claimed(index) {
                continue;
            }
            let (x, y) = (pixel.x as i64, pixel.y as i64);
            if !is_boundary(grid, x, y) {
                continue;
            }

            visited.claim(index);
            let body = grow_body(grid, &mut visited, &mut stack, bodies.len(), (x, y), &should_stop)?;
            trace!(
                "body {}: seed ({}, {}), {} points",
                body.id,
                body.seed.x,
                body.seed.y,
                body.len()
            );
            bodies.push(body);
        }

        debug!(
            "traced {} bodies from a {}x{} grid",
            bodies.len(),
            grid.width(),
            grid.height()
        );
        Some(bodies)
    }

    /// Grows one body from an already-claimed seed using the shared work-stack.
    fn grow_body(
        grid: &PixelGrid,
        visited: &mut VisitedMap,
        stack: &mut Vec<(i64, i64)>,
        id: usize,
        seed: (i64, i64),
        should_stop: &impl Fn() -> bool,
    ) -> Option<Body> {
        let mut body = Body::new(id, Point::new(seed.0 as u32, seed.1 as u32));
        stack.clear();
        stack.push(seed);

        while let Some((x, y)) = stack.pop() {
            if should_stop() {
                return None;
            }

            for (dx, dy) in NEIGHBOR_OFFSETS {
                let (nx, ny) = (x + dx, y + dy);
                let Some(index) = grid.index_of(nx, ny) else {
                    continue;
                };
                if visited.is_claimed(index) || !is_boundary(grid, nx, ny) {
                    continue;
                }

                visited.claim(index);
                body.push(Point::new(nx as u32, ny as u32));
                stack.push((nx, ny));
            }
        }

        Some(body)
    }

    /// One flag per pixel recording whether some body already owns it.
    #[derive(Debug)]
    struct VisitedMap {
        claimed: Vec<bool>,
    }

    impl VisitedMap {
        fn new(len: usize) -> Self {
            Self {
                claimed: vec![false; len],
            }
        }

        fn is_claimed(&self, index: usize) -> bool {
            self.claimed[index]
        }

        fn claim(&mut self, index: usize) {
            debug_assert!(!self.claimed[index], "pixel {index} claimed twice");
            self.claimed[index] = true;
        }
    }
}
