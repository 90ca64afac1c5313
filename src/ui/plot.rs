use eframe::egui::{RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, LineStyle, Plot, PlotPoints, VLine};

use crate::color;
use crate::state::SalaryChart;

pub const X_AXIS_LABEL: &str = "Annual Salary (Euros)";
pub const Y_AXIS_LABEL: &str = "Probability Density";
pub const HISTOGRAM_NAME: &str = "Salary";
pub const CURVE_NAME: &str = "PDF Curve";

// ---------------------------------------------------------------------------
// Salary distribution plot (central panel)
// ---------------------------------------------------------------------------

/// Render histogram, fitted curve and reference lines.
pub fn salary_plot(ui: &mut Ui, chart: &SalaryChart) {
    Plot::new("salary_plot")
        .legend(Legend::default())
        .x_axis_label(RichText::new(X_AXIS_LABEL).strong())
        .y_axis_label(RichText::new(Y_AXIS_LABEL).strong())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(histogram_bars(chart));
            if let Some(line) = pdf_line(chart) {
                plot_ui.line(line);
            }
            for vline in reference_lines(chart) {
                plot_ui.vline(vline);
            }
        });
}

/// Histogram as touching bars, one per bin.
fn histogram_bars(chart: &SalaryChart) -> BarChart {
    let fill = color::bar_fill();
    let outline = Stroke::new(1.0, color::BAR_OUTLINE);

    let bars: Vec<Bar> = chart
        .histogram
        .bins
        .iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.density)
                .width(bin.width())
                .fill(fill)
                .stroke(outline)
        })
        .collect();

    BarChart::new(bars).name(HISTOGRAM_NAME).color(fill)
}

/// Fitted density, absent when the sample has no spread.
fn pdf_line(chart: &SalaryChart) -> Option<Line> {
    if chart.curve.is_empty() {
        return None;
    }
    let points: PlotPoints = chart.curve.iter().copied().collect();
    Some(
        Line::new(points)
            .name(CURVE_NAME)
            .color(color::CURVE)
            .width(2.0),
    )
}

fn reference_lines(chart: &SalaryChart) -> Vec<VLine> {
    let colors = [color::MEAN_LINE, color::PERCENTILE_LINE];
    chart
        .reference_lines()
        .into_iter()
        .zip(colors)
        .map(|((name, x), c)| {
            VLine::new(x)
                .name(name)
                .color(c)
                .width(2.0)
                .style(LineStyle::dashed_loose())
        })
        .collect()
}
