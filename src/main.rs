mod app;
mod cli;
mod color;
mod data;
mod error;
mod report;
mod state;
mod stats;
mod ui;

use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{anyhow, Context, Result};
use app::SalaryViewerApp;
use clap::Parser;
use eframe::egui;

use cli::Cli;
use state::SalaryChart;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let sample = data::loader::load_sample(&cli.path)?;
    let chart = SalaryChart::build(&sample, &cli.chart_options())
        .with_context(|| format!("analysing {}", cli.path.display()))?;

    if !cli.no_display {
        show_chart(chart.clone(), cli.save.clone())?;
    }

    report::print_report(&chart.summary).context("writing report")?;
    Ok(())
}

/// Open the chart window and block until it is closed.
fn show_chart(chart: SalaryChart, save: Option<PathBuf>) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let (done_tx, done_rx) = mpsc::channel();
    let exporting = save.is_some();

    eframe::run_native(
        "Salary Viewer",
        options,
        Box::new(move |_cc| {
            let mut app = SalaryViewerApp::new(chart);
            if let Some(path) = save {
                app = app.with_export(path, done_tx);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| {
        log::error!("Display failed: {e}");
        anyhow!("display failed: {e}")
    })?;

    if exporting {
        done_rx
            .try_recv()
            .context("window closed before the chart was saved")??;
    }
    Ok(())
}
