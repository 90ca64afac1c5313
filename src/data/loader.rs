use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::Sample;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a salary sample from a headerless CSV file.
///
/// Layout: one value per line, no header row.
///
/// ```text
/// 31250.00
/// 28710.50
/// 45000
/// ```
///
/// Only the first field of each record is read. Blank lines are skipped.
/// Any row that is not a finite number (including `NaN` and `inf`) aborts
/// the load.
pub fn load_sample(path: &Path) -> Result<Sample> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let mut values = Vec::new();

    for result in reader.records() {
        let record = result.with_context(|| format!("reading CSV {}", path.display()))?;
        let line = record.position().map_or(0, |p| p.line());

        if record.iter().all(str::is_empty) {
            continue;
        }

        let field = record.get(0).unwrap_or("");
        let value = field.parse::<f64>().with_context(|| {
            format!(
                "{}:{line}: '{field}' is not a number ({} column)",
                path.display(),
                Sample::COLUMN
            )
        })?;
        if !value.is_finite() {
            bail!(
                "{}:{line}: '{field}' is not a finite number ({} column)",
                path.display(),
                Sample::COLUMN
            );
        }
        values.push(value);
    }

    let sample = Sample::new(values).with_context(|| format!("loading {}", path.display()))?;
    log::info!(
        "Loaded {} salaries from {}",
        sample.len(),
        path.display()
    );
    Ok(sample.with_source(path))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::StatsError;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_single_column() {
        let file = csv_file("10000\n20000\n30000.5\n40000\n50000\n");
        let sample = load_sample(file.path()).unwrap();
        assert_eq!(
            sample.values(),
            &[10000.0, 20000.0, 30000.5, 40000.0, 50000.0]
        );
        assert_eq!(sample.source(), Some(file.path()));
    }

    #[test]
    fn test_first_row_is_data_not_header() {
        let file = csv_file("42\n");
        let sample = load_sample(file.path()).unwrap();
        assert_eq!(sample.values(), &[42.0]);
    }

    #[test]
    fn test_blank_lines_and_whitespace_are_ignored() {
        let file = csv_file("  100 \n\n200\n   \n300");
        let sample = load_sample(file.path()).unwrap();
        assert_eq!(sample.values(), &[100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_non_numeric_row_names_the_line() {
        let file = csv_file("100\n200\nabc\n");
        let err = load_sample(file.path()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains(":3:"), "unexpected message: {msg}");
        assert!(msg.contains("'abc'"), "unexpected message: {msg}");
    }

    #[test]
    fn test_nan_row_is_rejected() {
        let file = csv_file("100\nNaN\n300\n");
        let err = load_sample(file.path()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains(":2:"), "unexpected message: {msg}");
        assert!(msg.contains("'NaN'"), "unexpected message: {msg}");
    }

    #[test]
    fn test_infinite_row_is_rejected() {
        let file = csv_file("100\n200\n-inf\n");
        let msg = format!("{:#}", load_sample(file.path()).unwrap_err());
        assert!(msg.contains(":3:"), "unexpected message: {msg}");
    }

    #[test]
    fn test_empty_file_fails() {
        let file = csv_file("");
        let err = load_sample(file.path()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<StatsError>(),
            Some(&StatsError::EmptySample)
        );
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");
        let err = load_sample(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.csv"));
    }
}
