use std::f64::consts::PI;

use crate::error::StatsError;
use crate::stats::describe;

/// Number of points the fitted curve is evaluated at by default.
pub const DEFAULT_CURVE_POINTS: usize = 100;

/// Population standard deviation (divisor `N`, not `N - 1`).
pub fn population_std_dev(values: &[f64]) -> Result<f64, StatsError> {
    let mean = describe::mean(values)?;
    let variance = values
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    Ok(variance.sqrt())
}

/// `points` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points)
                .map(|i| {
                    if i == points - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// A normal distribution fitted to a sample by its mean and population
/// standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalFit {
    pub mean: f64,
    pub std_dev: f64,
}

impl NormalFit {
    pub fn fit(values: &[f64]) -> Result<Self, StatsError> {
        let mean = describe::mean(values)?;
        let std_dev = population_std_dev(values)?;
        if std_dev == 0.0 {
            return Err(StatsError::ZeroSpread);
        }
        Ok(Self { mean, std_dev })
    }

    /// Probability density `1/(σ√(2π)) · exp(−(x−μ)²/(2σ²))`.
    pub fn pdf(&self, x: f64) -> f64 {
        let exponent = -(x - self.mean).powi(2) / (2.0 * self.std_dev.powi(2));
        self.peak() * exponent.exp()
    }

    /// Height of the density at the mean.
    pub fn peak(&self) -> f64 {
        1.0 / (self.std_dev * (2.0 * PI).sqrt())
    }

    /// Evaluate the density at `points` evenly spaced x values over
    /// `[start, end]`.
    pub fn curve(&self, start: f64, end: f64, points: usize) -> Vec<[f64; 2]> {
        linspace(start, end, points)
            .into_iter()
            .map(|x| [x, self.pdf(x)])
            .collect()
    }
}
