//! 2D correlation of a channel grid against a small odd-sized kernel.
//!
//! Border handling replicates the nearest edge pixel on each axis (never
//! zero padding), so the output grid always has the same dimensions as the
//! input. The three fixed kernels of the pipeline live here: the classical
//! 5×5 Gaussian approximation and the normalized Sobel pair.
use crate::image::ImageF32;

pub type Kernel3 = [[f32; 3]; 3];
pub type Kernel5 = [[f32; 5]; 5];

/// 5×5 Gaussian approximation, integer weights normalized by 159.
pub const GAUSSIAN_KERNEL: Kernel5 = [
    [2.0 / 159.0, 4.0 / 159.0, 5.0 / 159.0, 4.0 / 159.0, 2.0 / 159.0],
    [4.0 / 159.0, 9.0 / 159.0, 12.0 / 159.0, 9.0 / 159.0, 4.0 / 159.0],
    [5.0 / 159.0, 12.0 / 159.0, 15.0 / 159.0, 12.0 / 159.0, 5.0 / 159.0],
    [4.0 / 159.0, 9.0 / 159.0, 12.0 / 159.0, 9.0 / 159.0, 4.0 / 159.0],
    [2.0 / 159.0, 4.0 / 159.0, 5.0 / 159.0, 4.0 / 159.0, 2.0 / 159.0],
];

/// Horizontal Sobel derivative, normalized by 4.
pub const SOBEL_KERNEL_X: Kernel3 = [
    [-0.25, 0.0, 0.25],
    [-0.5, 0.0, 0.5],
    [-0.25, 0.0, 0.25],
];

/// Vertical Sobel derivative, normalized by 4.
pub const SOBEL_KERNEL_Y: Kernel3 = [
    [-0.25, -0.5, -0.25],
    [0.0, 0.0, 0.0],
    [0.25, 0.5, 0.25],
];

/// Correlate `src` with an R×C kernel (R, C odd), centered at
/// `(floor(R/2), floor(C/2))`. Out-of-bounds samples reuse the nearest
/// border pixel. Output dimensions equal input dimensions.
pub fn convolve<const R: usize, const C: usize>(
    src: &ImageF32,
    kernel: &[[f32; C]; R],
) -> ImageF32 {
    let mut out = ImageF32::new(src.w, src.h);
    if src.is_empty() {
        return out;
    }

    let half_r = (R / 2) as isize;
    let half_c = (C / 2) as isize;
    for y in 0..src.h {
        let dst = out.row_mut(y);
        for (x, cell) in dst.iter_mut().enumerate() {
            // f64 accumulation keeps symmetric kernels exactly zero on flat
            // regions; an f32 running sum leaves an ulp-sized residue there.
            let mut acc = 0.0f64;
            for (e, kernel_row) in kernel.iter().enumerate() {
                let dy = e as isize - half_r;
                for (f, &weight) in kernel_row.iter().enumerate() {
                    let dx = f as isize - half_c;
                    let sample = src.get_clamped(x as isize + dx, y as isize + dy);
                    acc += sample as f64 * weight as f64;
                }
            }
            *cell = acc as f32;
        }
    }
    out
}

/// Smooth a lightness grid with the fixed Gaussian kernel.
pub fn gaussian_blur(l: &ImageF32) -> ImageF32 {
    convolve(l, &GAUSSIAN_KERNEL)
}
