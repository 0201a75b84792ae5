//! The edge-detection core: convolution, gradients, suppression, linking.
//!
//! Data flows strictly left to right through four building blocks, each
//! consuming grids and allocating fresh outputs:
//!
//! - Convolution engine with edge-replicated borders and the fixed Gaussian
//!   and Sobel kernels.
//! - Gradient computation returning per-pixel magnitude and direction in
//!   degrees, folded to [0, 180].
//! - Non-maximum suppression with double-threshold classification into
//!   strong, weak, and suppressed pixels.
//! - Single-pass hysteresis linking of weak pixels onto strong neighbors.
//!
//! All border arithmetic goes through one clamped lookup
//! (`ImageF32::get_clamped`), so convolution, suppression, and linking share
//! the same out-of-bounds rule.

pub mod conv;
pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use conv::{convolve, gaussian_blur, GAUSSIAN_KERNEL, SOBEL_KERNEL_X, SOBEL_KERNEL_Y};
pub use grad::{sobel_gradients, Grad};
pub use hysteresis::link_edges;
pub use nms::{suppress_non_max, EdgeClassification};
