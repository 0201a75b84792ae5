//! Sobel gradients with magnitude and direction in degrees.
//!
//! - Convolves the blurred lightness with the normalized Sobel pair.
//! - Outputs per-pixel `mag = sqrt(gx^2 + gy^2)` and the gradient direction
//!   `atan2(gy, gx)` in degrees, folded into [0, 180]: only the axis of the
//!   gradient matters downstream, not its sign.
use super::conv::{convolve, SOBEL_KERNEL_X, SOBEL_KERNEL_Y};
use crate::image::ImageF32;

/// Per-pixel gradient magnitude and direction buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: ImageF32,
    /// Gradient direction in degrees, range [0, 180]
    pub dir_deg: ImageF32,
}

/// Compute Sobel gradients on a single-channel float image.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    let gx = convolve(l, &SOBEL_KERNEL_X);
    let gy = convolve(l, &SOBEL_KERNEL_Y);

    let mut mag = ImageF32::new(l.w, l.h);
    let mut dir_deg = ImageF32::new(l.w, l.h);
    for (i, (&dx, &dy)) in gx.data.iter().zip(gy.data.iter()).enumerate() {
        mag.data[i] = (dx * dx + dy * dy).sqrt();
        let mut deg = dy.atan2(dx).to_degrees();
        if deg < 0.0 {
            deg += 180.0;
        }
        // atan2's +pi end can overshoot 180 by an ulp after conversion.
        dir_deg.data[i] = deg.min(180.0);
    }

    Grad { mag, dir_deg }
}
