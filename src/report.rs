use std::io::{self, Write};

use crate::stats::describe::Summary;

/// The two report lines, amounts rounded to two decimals.
pub fn format_report(summary: &Summary) -> [String; 2] {
    [
        format!("Mean Salary (W): {:.2} Euros", summary.mean),
        format!("Value X: {:.2} Euros", summary.value),
    ]
}

/// Write the report to `out`, one line each.
pub fn write_report<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    for line in format_report(summary) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print the report to stdout.
pub fn print_report(summary: &Summary) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, summary)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_format() {
        let summary = Summary {
            mean: 30000.0,
            percentile: 33.0,
            value: 23200.000_000_000_004,
        };
        assert_eq!(
            format_report(&summary),
            [
                "Mean Salary (W): 30000.00 Euros".to_string(),
                "Value X: 23200.00 Euros".to_string(),
            ]
        );
    }

    #[test]
    fn test_rounding() {
        let summary = Summary {
            mean: 1234.5678,
            percentile: 33.0,
            value: 0.004,
        };
        let [mean, x] = format_report(&summary);
        assert_eq!(mean, "Mean Salary (W): 1234.57 Euros");
        assert_eq!(x, "Value X: 0.00 Euros");
    }

    #[test]
    fn test_write_report_lines() {
        let summary = Summary {
            mean: 45000.5,
            percentile: 33.0,
            value: 38000.25,
        };
        let mut buf = Vec::new();
        write_report(&mut buf, &summary).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Mean Salary (W): 45000.50 Euros\nValue X: 38000.25 Euros\n"
        );
    }
}
