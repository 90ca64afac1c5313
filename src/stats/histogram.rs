use std::ops::Range;

use crate::error::StatsError;

/// Bin count used when none is configured.
pub const DEFAULT_BINS: usize = 20;

/// A density-normalized histogram over equal-width bins.
///
/// The bins span `[min, max]` of the data. Each bin is half-open except the
/// last one, which also contains `max`. Bin heights are densities, so the sum
/// of `density * width` over all bins is 1.
#[derive(Debug, Clone)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

/// A single histogram bin.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Values covered by this bin (inclusive start, exclusive end except for
    /// the last bin).
    pub range: Range<f64>,
    /// Number of values that fall within this bin.
    pub count: u64,
    /// `count / (total * width)`.
    pub density: f64,
}

impl HistogramBin {
    pub fn width(&self) -> f64 {
        self.range.end - self.range.start
    }

    pub fn center(&self) -> f64 {
        (self.range.start + self.range.end) / 2.0
    }
}

impl Histogram {
    /// Builds a density histogram with `num_bins` equal-width bins.
    ///
    /// When every value is identical the range is widened to
    /// `[value - 0.5, value + 0.5]` so the bins keep a non-zero width.
    pub fn density(values: &[f64], num_bins: usize) -> Result<Self, StatsError> {
        if num_bins == 0 {
            return Err(StatsError::ZeroBins);
        }
        if values.is_empty() {
            return Err(StatsError::EmptySample);
        }

        let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let n = num_bins as f64;
        let width = (hi - lo) / n;

        // Edges are computed from the bin index to avoid accumulating error.
        let edge = |i: usize| {
            if i == num_bins {
                hi
            } else {
                lo + (hi - lo) * (i as f64) / n
            }
        };
        let mut bins: Vec<HistogramBin> = (0..num_bins)
            .map(|i| HistogramBin {
                range: edge(i)..edge(i + 1),
                count: 0,
                density: 0.0,
            })
            .collect();

        for &value in values {
            let position = ((value - lo) / width).floor();
            let mut idx = if position < 0.0 { 0 } else { position as usize };
            idx = idx.min(num_bins - 1);
            // Rounding in `position` can land a value one bin off its edges.
            if idx > 0 && value < bins[idx].range.start {
                idx -= 1;
            } else if idx + 1 < num_bins && value >= bins[idx].range.end {
                idx += 1;
            }
            bins[idx].count += 1;
        }

        let total = values.len() as f64;
        for bin in &mut bins {
            bin.density = bin.count as f64 / (total * bin.width());
        }

        Ok(Self { bins })
    }

    /// Lower edge of the first bin and upper edge of the last bin.
    pub fn span(&self) -> Option<Range<f64>> {
        let first = self.bins.first()?;
        let last = self.bins.last()?;
        Some(first.range.start..last.range.end)
    }

    /// Total of `density * width`, 1.0 up to rounding.
    pub fn area(&self) -> f64 {
        self.bins.iter().map(|b| b.density * b.width()).sum()
    }
}
