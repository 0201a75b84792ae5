//! Edge detector orchestrating the five-stage pipeline:
//! blur → gradient → non-maximum suppression → hysteresis linking → edge map.
//!
//! Stages run strictly in sequence, each fully materializing its output grid
//! before the next begins. The input buffer is read-only throughout; the
//! only state a run produces is its freshly allocated grids.
use crate::diagnostics::{EdgeReport, TimingBreakdown};
use crate::edges::{gaussian_blur, link_edges, sobel_gradients, suppress_non_max};
use crate::image::{ImageF32, RgbaImageF32};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Threshold knobs for the double-threshold classification.
///
/// The high threshold is `high_threshold_ratio * max_gradient`, the low
/// threshold is `low_threshold_ratio * high`. The shipped defaults favor
/// detail; raise them for less noise.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// Fraction of the maximum gradient magnitude marking strong pixels.
    pub high_threshold_ratio: f32,
    /// Fraction of the high threshold marking weak pixels.
    pub low_threshold_ratio: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            high_threshold_ratio: 0.1,
            low_threshold_ratio: 0.05,
        }
    }
}

/// Canny-style edge detector over a decoded RGBA buffer.
pub struct EdgeDetector {
    params: EdgeParams,
}

impl EdgeDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: EdgeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EdgeParams {
        &self.params
    }

    /// Run the pipeline on an image, returning the final edge map.
    pub fn process(&self, image: &RgbaImageF32) -> ImageF32 {
        self.process_with_diagnostics(image).edge_map
    }

    /// Run the pipeline and return the edge map together with thresholds,
    /// classification counts, and per-stage timings.
    pub fn process_with_diagnostics(&self, image: &RgbaImageF32) -> EdgeReport {
        debug!(
            "EdgeDetector::process start w={} h={} high_ratio={} low_ratio={}",
            image.w, image.h, self.params.high_threshold_ratio, self.params.low_threshold_ratio
        );
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let blur_start = Instant::now();
        let blurred = gaussian_blur(image.lightness());
        timing.push("blur", blur_start.elapsed().as_secs_f64() * 1000.0);

        let grad_start = Instant::now();
        let grad = sobel_gradients(&blurred);
        timing.push("gradient", grad_start.elapsed().as_secs_f64() * 1000.0);

        let nms_start = Instant::now();
        let class = suppress_non_max(
            &grad,
            self.params.high_threshold_ratio,
            self.params.low_threshold_ratio,
        );
        timing.push("nms", nms_start.elapsed().as_secs_f64() * 1000.0);

        let link_start = Instant::now();
        let edge_map = link_edges(&class);
        timing.push("link", link_start.elapsed().as_secs_f64() * 1000.0);
        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        let strong_pixels = class.strong.iter().filter(|&&s| s).count();
        let weak_pixels = class.weak.iter().filter(|&&w| w).count();
        let promoted_pixels = class
            .weak
            .iter()
            .zip(edge_map.data.iter())
            .filter(|(&weak, &v)| weak && v == 1.0)
            .count();
        debug!(
            "EdgeDetector::process done strong={} weak={} promoted={} total_ms={:.3}",
            strong_pixels, weak_pixels, promoted_pixels, timing.total_ms
        );

        EdgeReport {
            width: image.w,
            height: image.h,
            max_gradient: class.max_gradient,
            high_threshold: class.high_threshold,
            low_threshold: class.low_threshold,
            strong_pixels,
            weak_pixels,
            promoted_pixels,
            timing,
            edge_map,
        }
    }
}
