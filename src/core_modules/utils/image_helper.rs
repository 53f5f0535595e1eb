// Thin adapter between the `image` crate and the extractor. Decoding belongs to the
// caller; these helpers only reshape decoded buffers and write debug previews.

pub mod image_helper {
    use image::{DynamicImage, ImageEncoder, Rgb as ImageRgb, RgbImage};
    use std::path::Path;

    use crate::config::SketchConfig;
    use crate::core_modules::pixel::pixel::Rgb;
    use crate::error::SketchError;
    use crate::sketch::{Sketch, TracedSketch};

    const PAPER: ImageRgb<u8> = ImageRgb([255, 255, 255]);
    const PEN: ImageRgb<u8> = ImageRgb([0, 0, 0]);

    /// One RGB triple per pixel, row-major.
    pub fn rgb_triples(image: &RgbImage) -> Vec<Rgb> {
        image.pixels().map(|pixel| pixel.0).collect()
    }

    /// Converts any decoded image to RGB8 and builds a sketch from it.
    pub fn sketch_from_image(
        image: &DynamicImage,
        config: SketchConfig,
    ) -> Result<Sketch, SketchError> {
        let rgb = image.to_rgb8();
        Sketch::new(&rgb_triples(&rgb), rgb.width(), rgb.height(), config)
    }

    /// Decodes an image file and builds a sketch from it.
    pub fn open_sketch(path: impl AsRef<Path>, config: SketchConfig) -> Result<Sketch, SketchError> {
        let image = image::open(path)?;
        sketch_from_image(&image, config)
    }

    /// Draws every body point in black on a white page the size of the source image.
    pub fn render_outline(traced: &TracedSketch) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(traced.width, traced.height, PAPER);
        for (x, y) in traced.raw_coords() {
            canvas.put_pixel(x, y, PEN);
        }
        canvas
    }

    /// Writes `render_outline` as a PNG.
    pub fn save_outline(path: impl AsRef<Path>, traced: &TracedSketch) -> Result<(), SketchError> {
        let canvas = render_outline(traced);
        let output = std::fs::File::create(path).map_err(image::ImageError::IoError)?;
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            image::ExtendedColorType::Rgb8,
        )?;

        Ok(())
    }
}
