//! Non-maximum suppression and double-threshold classification.
//!
//! Each pixel's direction selects one of four 45°-wide sectors; the pixel
//! survives only if its magnitude is at least that of both neighbors along
//! the sector axis (indices clamped to the border, so a border pixel
//! compares against itself on the missing side). Survivors are classified
//! against two thresholds derived from the maximum gradient:
//!
//! - `high = high_ratio * max_gradient` → strong, value 1
//! - `low = low_ratio * high` → weak, value keeps the original magnitude
//! - below `low` → suppressed, value 0
//!
//! A flat image (maximum gradient 0) classifies every pixel suppressed.
use super::grad::Grad;
use crate::image::ImageF32;
use log::warn;

/// Three-way pixel classification produced by non-maximum suppression.
///
/// `strong` and `weak` are mutually exclusive per pixel; suppressed pixels
/// have neither flag set and carry value 0.
#[derive(Clone, Debug)]
pub struct EdgeClassification {
    /// Per-pixel value: 1 for strong, original magnitude for weak, else 0
    pub value: ImageF32,
    /// Strong-pixel mask, indexed `y * w + x`
    pub strong: Vec<bool>,
    /// Weak-pixel mask, indexed `y * w + x`
    pub weak: Vec<bool>,
    /// Maximum gradient magnitude over the whole grid
    pub max_gradient: f32,
    /// Threshold for strong pixels
    pub high_threshold: f32,
    /// Threshold for weak pixels
    pub low_threshold: f32,
}

impl EdgeClassification {
    #[inline]
    pub fn is_strong(&self, x: usize, y: usize) -> bool {
        self.strong[y * self.value.w + x]
    }

    #[inline]
    pub fn is_weak(&self, x: usize, y: usize) -> bool {
        self.weak[y * self.value.w + x]
    }
}

/// Neighbor offsets for the sector containing `dir_deg`.
///
/// Sector boundaries (inclusive on the upper side, degrees):
/// `[0, 22.5] ∪ (157.5, 180]` east-west, `(22.5, 67.5]` northwest-southeast,
/// `(67.5, 112.5]` north-south, `(112.5, 157.5]` southwest-northeast.
/// Any finite value outside [0, 180] lands in the east-west arm.
#[inline]
fn axis_offsets(dir_deg: f32) -> [(isize, isize); 2] {
    if dir_deg <= 22.5 || dir_deg > 157.5 {
        [(-1, 0), (1, 0)]
    } else if dir_deg <= 67.5 {
        [(-1, -1), (1, 1)]
    } else if dir_deg <= 112.5 {
        [(0, -1), (0, 1)]
    } else {
        [(-1, 1), (1, -1)]
    }
}

/// Thin edges along the gradient direction and classify the survivors.
pub fn suppress_non_max(grad: &Grad, high_ratio: f32, low_ratio: f32) -> EdgeClassification {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut value = ImageF32::new(w, h);
    let mut strong = vec![false; w * h];
    let mut weak = vec![false; w * h];

    let max_gradient = grad.mag.max_value();
    let high_threshold = high_ratio * max_gradient;
    let low_threshold = low_ratio * high_threshold;

    // A flat grid carries no edges; with both thresholds at zero the scan
    // would otherwise mark every zero-magnitude pixel strong.
    if max_gradient > 0.0 {
        for y in 0..h {
            for x in 0..w {
                let mag = grad.mag.get(x, y);
                let dir = grad.dir_deg.get(x, y);
                if !(0.0..=180.0).contains(&dir) {
                    warn!("gradient direction out of [0, 180] at ({x}, {y}): {dir}");
                }

                let [(dx1, dy1), (dx2, dy2)] = axis_offsets(dir);
                let one = grad.mag.get_clamped(x as isize + dx1, y as isize + dy1);
                let two = grad.mag.get_clamped(x as isize + dx2, y as isize + dy2);
                if mag < one || mag < two {
                    continue;
                }

                let idx = y * w + x;
                if mag >= high_threshold {
                    value.data[idx] = 1.0;
                    strong[idx] = true;
                } else if mag >= low_threshold {
                    value.data[idx] = mag;
                    weak[idx] = true;
                }
            }
        }
    }

    EdgeClassification {
        value,
        strong,
        weak,
        max_gradient,
        high_threshold,
        low_threshold,
    }
}
