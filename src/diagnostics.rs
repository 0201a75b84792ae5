//! Run diagnostics: per-stage timings and a serializable report.
use crate::image::ImageF32;
use serde::Serialize;

/// Timing entry for a single pipeline stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one detector run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Full result of a detector run: the edge map plus the numbers a tool needs
/// to judge the classification (thresholds, pixel counts, timings).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeReport {
    pub width: usize,
    pub height: usize,
    pub max_gradient: f32,
    pub high_threshold: f32,
    pub low_threshold: f32,
    /// Pixels classified strong by suppression
    pub strong_pixels: usize,
    /// Pixels classified weak by suppression
    pub weak_pixels: usize,
    /// Weak pixels promoted to edges by linking
    pub promoted_pixels: usize,
    pub timing: TimingBreakdown,
    /// Final edge map, values in [0, 1]
    #[serde(skip)]
    pub edge_map: ImageF32,
}
