//! Decoded RGBA pixel buffer split into per-channel float grids.
//!
//! Channels are normalized to [0, 1] at construction, and the derived
//! lightness grid (`0.299 r + 0.587 g + 0.114 b`) is computed once. The
//! buffer is immutable afterwards; the pipeline only ever reads it.
use super::ImageF32;

/// RGBA image as four channel grids plus a derived lightness grid, all W×H.
#[derive(Clone, Debug)]
pub struct RgbaImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Red channel in [0, 1]
    pub r: ImageF32,
    /// Green channel in [0, 1]
    pub g: ImageF32,
    /// Blue channel in [0, 1]
    pub b: ImageF32,
    /// Alpha channel in [0, 1]
    pub a: ImageF32,
    /// Lightness `0.299 r + 0.587 g + 0.114 b`
    pub l: ImageF32,
}

impl RgbaImageF32 {
    /// Split interleaved RGBA bytes (4 per pixel, row-major) into normalized
    /// channel grids and compute the lightness grid.
    pub fn from_rgba8(w: usize, h: usize, data: &[u8]) -> Self {
        assert_eq!(data.len(), w * h * 4, "RGBA buffer length must be w * h * 4");

        let mut r = ImageF32::new(w, h);
        let mut g = ImageF32::new(w, h);
        let mut b = ImageF32::new(w, h);
        let mut a = ImageF32::new(w, h);
        let mut l = ImageF32::new(w, h);

        for (i, px) in data.chunks_exact(4).enumerate() {
            let red = px[0] as f32 / 255.0;
            let green = px[1] as f32 / 255.0;
            let blue = px[2] as f32 / 255.0;
            r.data[i] = red;
            g.data[i] = green;
            b.data[i] = blue;
            a.data[i] = px[3] as f32 / 255.0;
            l.data[i] = 0.299 * red + 0.587 * green + 0.114 * blue;
        }

        Self { w, h, r, g, b, a, l }
    }

    /// Borrow the derived lightness grid.
    pub fn lightness(&self) -> &ImageF32 {
        &self.l
    }
}
