use std::path::PathBuf;

use clap::Parser;

use crate::state::{ChartOptions, DEFAULT_PERCENTILE};
use crate::stats::histogram::DEFAULT_BINS;
use crate::stats::normal::DEFAULT_CURVE_POINTS;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "salary-viewer",
    version,
    about = "Histogram, fitted normal curve and summary of a salary column"
)]
pub struct Cli {
    /// Headerless CSV with one salary per line
    #[arg(default_value = "data1-1.csv")]
    pub path: PathBuf,

    /// Number of histogram bins
    #[arg(long, default_value_t = DEFAULT_BINS)]
    pub bins: usize,

    /// Percentile reported as "X" (0-100)
    #[arg(long, default_value_t = DEFAULT_PERCENTILE)]
    pub percentile: f64,

    /// Save the rendered chart as PNG and close the window
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Do not open a window, only print the summary
    #[arg(long, conflicts_with = "save")]
    pub no_display: bool,
}

impl Cli {
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            bins: self.bins,
            percentile: self.percentile,
            curve_points: DEFAULT_CURVE_POINTS,
        }
    }
}
