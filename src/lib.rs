#![doc = include_str!("../README.md")]

pub mod detector;
pub mod diagnostics;
pub mod edges;
pub mod image;

// Main entry points: detector + report.
pub use crate::detector::{EdgeDetector, EdgeParams};
pub use crate::diagnostics::EdgeReport;

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_detector::prelude::*;
///
/// let (w, h) = (64usize, 48usize);
/// let rgba = vec![0u8; w * h * 4];
/// let image = RgbaImageF32::from_rgba8(w, h, &rgba);
///
/// let detector = EdgeDetector::new(EdgeParams::default());
/// let report = detector.process_with_diagnostics(&image);
/// println!(
///     "strong={} weak={} latency_ms={:.3}",
///     report.strong_pixels, report.weak_pixels, report.timing.total_ms
/// );
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, RgbaImageF32};
    pub use crate::{EdgeDetector, EdgeParams, EdgeReport};
}
