use thiserror::Error;

/// Failures of the statistics layer. All of them are fatal for the viewer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("dataset is empty")]
    EmptySample,

    #[error("percentile must be within 0..=100, got {0}")]
    InvalidPercentile(f64),

    #[error("histogram needs at least one bin")]
    ZeroBins,

    /// All observations are equal, so no normal density can be fitted.
    #[error("standard deviation is zero, cannot fit a normal curve")]
    ZeroSpread,
}
