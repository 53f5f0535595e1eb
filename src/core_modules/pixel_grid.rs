// THEORY:
// The `PixelGrid` is the bridge between a raw, decoded pixel buffer and the spatial
// reasoning of the extractor. It takes a flat sequence of colors, classifies each one
// exactly once, and lays the results out row-major so that `(x, y)` lookups are a
// single multiply-add.
//
// Key architectural principles:
// 1.  **Fail fast on bad metadata**: The only thing that can go wrong while building a
//     grid is a buffer that does not hold `width * height` pixels. That is checked up
//     front, before any classification work, and reported as a
//     `SketchError::PixelCountMismatch`.
// 2.  **Exclusive ownership**: A grid is owned by exactly one `Sketch`. It is never
//     shared between sessions and never mutated after construction.
// 3.  **Signed lookups**: `get` accepts signed coordinates so neighbour offsets can be
//     applied without pre-checking for underflow. Anything outside the grid is `None`.

use crate::core_modules::pixel::pixel::{
    Byte, Pixel, RGBA_CHANNELS, RGB_CHANNELS, Rgb, rgb_from_bytes,
};
use crate::error::SketchError;

/// A row-major grid of classified pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Builds a grid from one RGB triple per pixel.
    pub fn from_rgb_triples(colors: &[Rgb], width: u32, height: u32) -> Result<Self, SketchError> {
        check_pixel_count(colors.len(), width, height)?;
        Ok(Self::classify(colors.iter().copied(), width, height))
    }

    /// Builds a grid from a flat `RGBRGB...` byte buffer.
    pub fn from_rgb_bytes(bytes: &[Byte], width: u32, height: u32) -> Result<Self, SketchError> {
        Self::from_interleaved(bytes, RGB_CHANNELS, width, height)
    }

    /// Builds a grid from a flat `RGBARGBA...` byte buffer. Alpha is ignored.
    pub fn from_rgba_bytes(bytes: &[Byte], width: u32, height: u32) -> Result<Self, SketchError> {
        Self::from_interleaved(bytes, RGBA_CHANNELS, width, height)
    }

    fn from_interleaved(
        bytes: &[Byte],
        channels: usize,
        width: u32,
        height: u32,
    ) -> Result<Self, SketchError> {
        if bytes.len() % channels != 0 {
            return Err(SketchError::Configuration(format!(
                "buffer of {} bytes is not a whole number of {channels}-channel pixels",
                bytes.len()
            )));
        }
        let pixel_count = bytes.len() / channels;
        check_pixel_count(pixel_count, width, height)?;
        let colors = bytes.chunks_exact(channels).map(rgb_from_bytes);
        Ok(Self::classify(colors, width, height))
    }

    fn classify(colors: impl Iterator<Item = Rgb>, width: u32, height: u32) -> Self {
        let pixels = colors
            .enumerate()
            .map(|(i, rgb)| {
                let x = (i % width as usize) as u32;
                let y = (i / width as usize) as u32;
                Pixel::new(x, y, rgb)
            })
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels (`width * height`).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Looks up a pixel, returning `None` when `(x, y)` lies outside the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<&Pixel> {
        self.index_of(x, y).map(|index| &self.pixels[index])
    }

    /// Row-major index of `(x, y)`, or `None` when out of bounds.
    pub fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterates the grid one row at a time. Always yields `height` rows of `width` pixels.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        let width = self.width as usize;
        (0..self.height as usize).map(move |y| &self.pixels[y * width..(y + 1) * width])
    }

    pub fn foreground_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_foreground()).count()
    }
}

fn expected_pixels(width: u32, height: u32) -> Result<usize, SketchError> {
    (width as usize).checked_mul(height as usize).ok_or_else(|| {
        SketchError::Configuration(format!("image of {width}x{height} pixels is too large"))
    })
}

fn check_pixel_count(actual: usize, width: u32, height: u32) -> Result<(), SketchError> {
    let expected = expected_pixels(width, height)?;
    if actual != expected {
        return Err(SketchError::PixelCountMismatch {
            expected,
            actual,
            width,
            height,
        });
    }
    Ok(())
}
