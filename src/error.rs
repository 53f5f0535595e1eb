// THEORY:
// Every failure the outline extractor can report lives in this one enum. The core
// tracing pass is a total function of a well-formed grid, so nearly all variants are
// raised at the edges: when the pixel buffer is handed over, when a config is
// validated, when an image file is decoded, or when the async worker pool loses a
// channel. `Cancelled` is the only variant the traversal itself can produce, and only
// because a caller asked it to stop.

use thiserror::Error;

/// Errors produced while building, tracing or batching sketches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SketchError {
    /// The pixel buffer does not describe a `width x height` image.
    #[error(
        "configuration error: buffer holds {actual} pixels but a {width}x{height} image needs {expected}"
    )]
    PixelCountMismatch {
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
    },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("extraction cancelled")]
    Cancelled,

    #[error("failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("worker pool failure: {0}")]
    Worker(String),
}
