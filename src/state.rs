use crate::data::model::Sample;
use crate::error::StatsError;
use crate::stats::describe::Summary;
use crate::stats::histogram::{Histogram, DEFAULT_BINS};
use crate::stats::normal::{NormalFit, DEFAULT_CURVE_POINTS};

/// Percentile reported as "X" when none is configured.
pub const DEFAULT_PERCENTILE: f64 = 33.0;

// ---------------------------------------------------------------------------
// Chart options
// ---------------------------------------------------------------------------

/// Knobs for building the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    pub bins: usize,
    pub percentile: f64,
    pub curve_points: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            percentile: DEFAULT_PERCENTILE,
            curve_points: DEFAULT_CURVE_POINTS,
        }
    }
}

// ---------------------------------------------------------------------------
// Chart state
// ---------------------------------------------------------------------------

/// Everything the plot needs, computed once from the sample and independent
/// of rendering.
#[derive(Debug, Clone)]
pub struct SalaryChart {
    /// Number of observations the chart was built from.
    pub sample_len: usize,

    /// Where the sample came from, for the status line.
    pub source: Option<String>,

    /// Mean and percentile value.
    pub summary: Summary,

    /// Density histogram of the sample.
    pub histogram: Histogram,

    /// Normal distribution fitted to the sample. `None` when every value is
    /// equal and the density is undefined.
    pub fit: Option<NormalFit>,

    /// Fitted density evaluated over `[min, max]` of the sample, empty without
    /// a fit.
    pub curve: Vec<[f64; 2]>,
}

impl SalaryChart {
    pub fn build(sample: &Sample, options: &ChartOptions) -> Result<Self, StatsError> {
        let summary = Summary::compute(sample, options.percentile)?;
        let histogram = Histogram::density(sample.values(), options.bins)?;
        let fit = match NormalFit::fit(sample.values()) {
            Ok(fit) => Some(fit),
            Err(StatsError::ZeroSpread) => {
                log::warn!("All salaries are equal, skipping the fitted curve");
                None
            }
            Err(e) => return Err(e),
        };
        let curve = fit
            .map(|f| f.curve(sample.min(), sample.max(), options.curve_points))
            .unwrap_or_default();

        log::debug!(
            "mean={:.4} p{}={:.4} std_dev={:.4} bins={} area={:.6}",
            summary.mean,
            summary.percentile,
            summary.value,
            fit.map_or(0.0, |f| f.std_dev),
            histogram.bins.len(),
            histogram.area()
        );

        Ok(Self {
            sample_len: sample.len(),
            source: sample.source().map(|p| p.display().to_string()),
            summary,
            histogram,
            fit,
            curve,
        })
    }

    /// Vertical reference lines: (legend label, x position).
    pub fn reference_lines(&self) -> [(&'static str, f64); 2] {
        [
            ("Mean Salary", self.summary.mean),
            ("X", self.summary.value),
        ]
    }
}
