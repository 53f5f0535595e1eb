// THEORY:
// The `sketch` module is the top-level API of the outline extractor. A `Sketch` is one
// extraction session: it exclusively owns a classified grid, its configuration, and
// the bodies traced from it. Nothing is shared between sessions.
//
// The session drives the pipeline in a fixed order:
//   grid (built in `new`) -> `extract` -> `simplify` -> exports.
// `trace` runs both middle stages. Extraction is idempotent: running it again on the
// same sketch replaces the bodies with an identical list.

use log::debug;

use crate::config::SketchConfig;
use crate::core_modules::body::Body;
use crate::core_modules::body_extractor::body_extractor;
use crate::core_modules::cancel::CancelToken;
use crate::core_modules::outline_exporter::{self, PathElement};
use crate::core_modules::path_simplifier;
use crate::core_modules::pixel::pixel::{Coordinate, Rgb};
use crate::core_modules::pixel_grid::PixelGrid;
use crate::error::SketchError;

/// One outline extraction session over a single image.
#[derive(Debug, Clone)]
pub struct Sketch {
    grid: PixelGrid,
    config: SketchConfig,
    bodies: Vec<Body>,
}

impl Sketch {
    /// Validates `config` and classifies `pixels` (one RGB triple per pixel, row-major).
    pub fn new(
        pixels: &[Rgb],
        width: u32,
        height: u32,
        config: SketchConfig,
    ) -> Result<Self, SketchError> {
        config.validate()?;
        let grid = PixelGrid::from_rgb_triples(pixels, width, height)?;
        Ok(Self::with_grid(grid, config))
    }

    /// Wraps an already-built grid.
    pub fn from_grid(grid: PixelGrid, config: SketchConfig) -> Result<Self, SketchError> {
        config.validate()?;
        Ok(Self::with_grid(grid, config))
    }

    fn with_grid(grid: PixelGrid, config: SketchConfig) -> Self {
        Self {
            grid,
            config,
            bodies: Vec::new(),
        }
    }

    /// Traces every body, replacing any previous result.
    pub fn extract(&mut self) -> &[Body] {
        self.bodies = body_extractor::find_bodies(&self.grid);
        &self.bodies
    }

    /// Like `extract`, but stops with `SketchError::Cancelled` once `cancel` is set.
    /// On cancellation the previous bodies are left untouched.
    pub fn extract_with_cancel(&mut self, cancel: &CancelToken) -> Result<&[Body], SketchError> {
        self.bodies = body_extractor::find_bodies_with_cancel(&self.grid, cancel)?;
        Ok(&self.bodies)
    }

    /// Decimates every body with `config.min_distance`.
    pub fn simplify(&mut self) {
        let before = self.point_count();
        path_simplifier::simplify_all(&mut self.bodies, self.config.min_distance);
        debug!(
            "simplified {} bodies from {} to {} points (min_distance {})",
            self.bodies.len(),
            before,
            self.point_count(),
            self.config.min_distance
        );
    }

    /// `extract` followed by `simplify`.
    pub fn trace(&mut self) -> &[Body] {
        self.extract();
        self.simplify();
        &self.bodies
    }

    pub fn trace_with_cancel(&mut self, cancel: &CancelToken) -> Result<&[Body], SketchError> {
        self.extract_with_cancel(cancel)?;
        self.simplify();
        Ok(&self.bodies)
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn point_count(&self) -> usize {
        self.bodies.iter().map(Body::len).sum()
    }

    pub fn raw_coords(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + Clone + '_ {
        outline_exporter::raw_coords(&self.bodies)
    }

    pub fn coords_with_breaks(&self) -> impl Iterator<Item = PathElement> + Clone + '_ {
        outline_exporter::coords_with_breaks(&self.bodies)
    }

    pub fn polylines(&self) -> Vec<Vec<(Coordinate, Coordinate)>> {
        outline_exporter::polylines(&self.bodies)
    }

    /// Drops the grid and keeps only what export needs.
    pub fn into_traced(self) -> TracedSketch {
        TracedSketch {
            width: self.grid.width(),
            height: self.grid.height(),
            bodies: self.bodies,
        }
    }
}

/// The exportable result of a finished sketch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TracedSketch {
    pub width: u32,
    pub height: u32,
    pub bodies: Vec<Body>,
}

impl TracedSketch {
    pub fn raw_coords(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + Clone + '_ {
        outline_exporter::raw_coords(&self.bodies)
    }

    pub fn coords_with_breaks(&self) -> impl Iterator<Item = PathElement> + Clone + '_ {
        outline_exporter::coords_with_breaks(&self.bodies)
    }

    pub fn polylines(&self) -> Vec<Vec<(Coordinate, Coordinate)>> {
        outline_exporter::polylines(&self.bodies)
    }
}
