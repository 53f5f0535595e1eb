pub mod synthetic_image {
    pub const PAPER: [u8; 3] = [255, 255, 255];
    pub const INK: [u8; 3] = [0, 0, 0];

    /// A blank page of `width x height` RGB triples.
    pub fn blank(width: u32, height: u32) -> Vec<[u8; 3]> {
        vec![PAPER; (width * height) as usize]
    }

    /// Fills the inclusive rectangle `(x0, y0)..=(x1, y1)` with ink.
    pub fn fill_rect(pixels: &mut [[u8; 3]], width: u32, (x0, y0): (u32, u32), (x1, y1): (u32, u32)) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                pixels[(y * width + x) as usize] = INK;
            }
        }
    }

    /// Number of pixels on the 8-connected boundary ring of a solid `w x h` rectangle.
    pub fn ring_size(w: u32, h: u32) -> usize {
        if w <= 2 || h <= 2 {
            (w * h) as usize
        } else {
            (2 * w + 2 * (h - 2)) as usize
        }
    }
}
