use crate::data::model::Sample;
use crate::error::StatsError;

/// Summary statistics printed by the viewer and drawn as reference lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Arithmetic mean of the sample (the "W" value).
    pub mean: f64,
    /// The percentile that `value` was computed for, in `0.0..=100.0`.
    pub percentile: f64,
    /// The value at `percentile` (the "X" value).
    pub value: f64,
}

impl Summary {
    /// Computes the mean and the value at percentile `p` of a sample.
    pub fn compute(sample: &Sample, p: f64) -> Result<Self, StatsError> {
        Ok(Self {
            mean: mean(sample.values())?,
            percentile: p,
            value: percentile(sample.values(), p)?,
        })
    }
}

/// Arithmetic mean of `values`.
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptySample);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Value at percentile `p` of unsorted `values`.
///
/// Sorts a copy of the input and delegates to [`percentile_sorted`].
pub fn percentile(values: &[f64], p: f64) -> Result<f64, StatsError> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    percentile_sorted(&sorted, p)
}

/// Value at percentile `p` of ascending `sorted_values`.
///
/// Uses linear interpolation between the two closest order statistics: for
/// `n` values the rank is `h = (n - 1) * p / 100` and the result is
/// `x[⌊h⌋] + (h - ⌊h⌋) * (x[⌈h⌉] - x[⌊h⌋])`. `p = 0` yields the minimum and
/// `p = 100` the maximum.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending `f64::total_cmp`
/// order.
pub fn percentile_sorted(sorted_values: &[f64], p: f64) -> Result<f64, StatsError> {
    assert!(
        sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
        "values must be sorted in ascending order"
    );
    if !(0.0..=100.0).contains(&p) {
        return Err(StatsError::InvalidPercentile(p));
    }
    let Some(&first) = sorted_values.first() else {
        return Err(StatsError::EmptySample);
    };
    if sorted_values.len() == 1 {
        return Ok(first);
    }

    let rank = (sorted_values.len() - 1) as f64 * p / 100.0;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(sorted_values.len() - 1);
    let fraction = rank - lower as f64;

    let lo = sorted_values[lower];
    let hi = sorted_values[upper];
    Ok(lo + fraction * (hi - lo))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const SALARIES: [f64; 5] = [10000.0, 20000.0, 30000.0, 40000.0, 50000.0];

    #[test]
    fn test_mean_is_arithmetic_average() {
        assert_eq!(mean(&SALARIES).unwrap(), 30000.0);
        assert_eq!(mean(&[1.0, 2.0, 4.0]).unwrap(), 7.0 / 3.0);
    }

    #[test]
    fn test_mean_of_empty_fails() {
        assert_eq!(mean(&[]), Err(StatsError::EmptySample));
    }

    #[test]
    fn test_p33_interpolates_between_order_statistics() {
        let x = percentile(&SALARIES, 33.0).unwrap();
        assert!((x - 23200.0).abs() < 1e-9, "got {x}");
    }

    #[test]
    fn test_percentile_sorts_its_input() {
        let shuffled = [40000.0, 10000.0, 50000.0, 30000.0, 20000.0];
        assert_eq!(
            percentile(&shuffled, 50.0).unwrap(),
            percentile(&SALARIES, 50.0).unwrap()
        );
    }

    #[rstest]
    #[case(0.0, 10000.0)]
    #[case(25.0, 20000.0)]
    #[case(50.0, 30000.0)]
    #[case(100.0, 50000.0)]
    fn test_percentile_at_exact_ranks(#[case] p: f64, #[case] expected: f64) {
        assert_eq!(percentile(&SALARIES, p).unwrap(), expected);
    }

    #[test]
    fn test_percentile_is_bounded_and_monotone() {
        let values = [3.5, 120.0, 7.25, 7.25, 42.0, 0.5, 99.0];
        let min = 0.5;
        let max = 120.0;
        let mut previous = f64::NEG_INFINITY;
        for step in 0..=200 {
            let p = f64::from(step) * 0.5;
            let v = percentile(&values, p).unwrap();
            assert!((min..=max).contains(&v), "P{p} = {v} out of range");
            assert!(v >= previous, "P{p} = {v} decreased from {previous}");
            previous = v;
        }
    }

    #[test]
    fn test_nan_sorts_last_without_panicking() {
        let values = [300.0, f64::NAN, 100.0];
        assert_eq!(percentile(&values, 0.0).unwrap(), 100.0);
        assert_eq!(percentile(&values, 25.0).unwrap(), 200.0);
    }

    #[test]
    fn test_single_value_percentile() {
        assert_eq!(percentile(&[7.0], 33.0).unwrap(), 7.0);
    }

    #[rstest]
    #[case(-1.0)]
    #[case(100.5)]
    #[case(f64::NAN)]
    fn test_percentile_out_of_range(#[case] p: f64) {
        assert!(matches!(
            percentile(&SALARIES, p),
            Err(StatsError::InvalidPercentile(_))
        ));
    }

    #[test]
    fn test_summary_of_sample() {
        let sample = Sample::new(SALARIES.to_vec()).unwrap();
        let summary = Summary::compute(&sample, 33.0).unwrap();
        assert_eq!(summary.mean, 30000.0);
        assert_eq!(summary.percentile, 33.0);
        assert!((summary.value - 23200.0).abs() < 1e-9);
    }
}
