// THEORY:
// This file is the main entry point for the `sketch_outline` library crate. It turns a
// decoded image's pixel buffer into ordered outline paths for a pen plotter or any
// other renderer that draws strokes.
//
// The pipeline, leaf-first:
//   PixelGrid -> boundary classification (on demand) -> body extraction
//   -> path simplification -> outline export.
//
// `Sketch` is the high-level interface for one image and `SketchPool` traces many
// images concurrently. The `core_modules` stay public for callers that want to drive
// individual stages themselves.

//! # Example
//!
//! ```no_run
//! use sketch_outline::{PathElement, Sketch, SketchConfig};
//!
//! let pixels = vec![[255u8, 255, 255]; 64 * 64];
//! let config = SketchConfig { min_distance: 2.0 };
//! let mut sketch = Sketch::new(&pixels, 64, 64, config)?;
//! sketch.trace();
//! for element in sketch.coords_with_breaks() {
//!     match element {
//!         PathElement::Coord(x, y) => println!("{x} {y}"),
//!         PathElement::Break => println!("pen up"),
//!     }
//! }
//! # Ok::<(), sketch_outline::SketchError>(())
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod core_modules;
pub mod error;
pub mod parallel_sketch;
pub mod sketch;

pub use config::{PoolConfig, SketchConfig};
pub use core_modules::body::{Body, Point};
pub use core_modules::cancel::CancelToken;
pub use core_modules::outline_exporter::PathElement;
pub use core_modules::pixel_grid::PixelGrid;
pub use error::SketchError;
pub use parallel_sketch::{SketchJob, SketchPool};
pub use sketch::{Sketch, TracedSketch};
