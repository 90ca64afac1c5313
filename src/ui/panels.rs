use eframe::egui::{RichText, Ui};

use crate::state::SalaryChart;

pub const TITLE: &str = "Salary Distribution Analysis";

// ---------------------------------------------------------------------------
// Title bar
// ---------------------------------------------------------------------------

/// Render the chart title, centered and bold.
pub fn title_bar(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(TITLE).strong());
    });
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

/// Render sample size, source file and the fitted parameters.
pub fn status_bar(ui: &mut Ui, chart: &SalaryChart) {
    ui.horizontal(|ui: &mut Ui| {
        let source = chart.source.as_deref().unwrap_or("<memory>");
        ui.label(format!("{} salaries from {source}", chart.sample_len));
        if let Some(span) = chart.histogram.span() {
            ui.separator();
            ui.label(format!("range {:.2} – {:.2}", span.start, span.end));
        }
        ui.separator();
        let sigma = chart.fit.map_or(0.0, |f| f.std_dev);
        ui.label(format!(
            "μ = {:.2}   σ = {:.2}   P{} = {:.2}",
            chart.summary.mean, sigma, chart.summary.percentile, chart.summary.value
        ));
    });
}
