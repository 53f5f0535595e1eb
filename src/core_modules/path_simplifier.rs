// THEORY:
// Traced outlines are dense: every boundary pixel is a point. Plotters do not need
// that, so `PathSimplifier` thins each body with a greedy minimum-spacing rule.
//
// The first point is always kept. Walking forward, a point is kept only if it lies
// strictly farther than `min_distance` from the most recently *kept* point, and it
// then becomes the new reference. Distances are true 2D Euclidean distances.
//
// The result is always a subsequence of the traced order, so the outline's shape and
// direction are preserved. `min_distance = 0` keeps everything (consecutive traced
// pixels are never coincident); `min_distance = inf` keeps only the first point.

use crate::core_modules::body::{Body, Point};

/// Replaces `body.points` with its decimated subsequence.
pub fn simplify(body: &mut Body, min_distance: f64) {
    body.points = decimate(&body.points, min_distance);
}

/// Applies `simplify` to every body.
pub fn simplify_all(bodies: &mut [Body], min_distance: f64) {
    for body in bodies.iter_mut() {
        simplify(body, min_distance);
    }
}

/// Greedy minimum-spacing decimation of an ordered point list.
pub fn decimate(points: &[Point], min_distance: f64) -> Vec<Point> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut kept = vec![first];
    let mut reference = first;
    for &point in rest {
        if point.distance(&reference) > min_distance {
            kept.push(point);
            reference = point;
        }
    }
    kept
}
