use std::path::{Path, PathBuf};

use crate::error::StatsError;

// ---------------------------------------------------------------------------
// Sample – the loaded salary column
// ---------------------------------------------------------------------------

/// An ordered, immutable sequence of salary observations.
///
/// A `Sample` always holds at least one value, so downstream statistics never
/// have to deal with an empty column.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
    /// File the values were read from, if any.
    source: Option<PathBuf>,
}

impl Sample {
    /// Column name used for the single input column.
    pub const COLUMN: &'static str = "Salary";

    pub fn new(values: Vec<f64>) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptySample);
        }
        Ok(Self {
            values,
            source: None,
        })
    }

    /// Attach the path the sample was loaded from.
    pub fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of observations (never zero).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_is_rejected() {
        assert_eq!(Sample::new(vec![]), Err(StatsError::EmptySample));
    }

    #[test]
    fn test_min_max_keep_input_order() {
        let sample = Sample::new(vec![30.0, 10.0, 50.0, 20.0]).unwrap();
        assert_eq!(sample.min(), 10.0);
        assert_eq!(sample.max(), 50.0);
        assert_eq!(sample.values(), &[30.0, 10.0, 50.0, 20.0]);
        assert_eq!(sample.len(), 4);
    }

    #[test]
    fn test_source_path() {
        let sample = Sample::new(vec![1.0])
            .unwrap()
            .with_source(Path::new("data1-1.csv"));
        assert_eq!(sample.source(), Some(Path::new("data1-1.csv")));
    }
}
