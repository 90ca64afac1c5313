use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use anyhow::{Context, Result};
use eframe::egui::{self, ColorImage};

use crate::state::SalaryChart;
use crate::ui::{panels, plot};

/// Frames painted before a screenshot is requested, so the plot has settled
/// its auto bounds.
const FRAMES_BEFORE_CAPTURE: u32 = 2;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalaryViewerApp {
    pub chart: SalaryChart,
    export: Option<PngExport>,
}

/// A pending "save the window as PNG, then close" request.
struct PngExport {
    path: PathBuf,
    frames: u32,
    requested: bool,
    done: Sender<Result<PathBuf>>,
}

impl SalaryViewerApp {
    pub fn new(chart: SalaryChart) -> Self {
        Self {
            chart,
            export: None,
        }
    }

    /// Save the first settled frame to `path` and report the outcome on `done`.
    pub fn with_export(mut self, path: PathBuf, done: Sender<Result<PathBuf>>) -> Self {
        self.export = Some(PngExport {
            path,
            frames: 0,
            requested: false,
            done,
        });
        self
    }

    fn drive_export(&mut self, ctx: &egui::Context) {
        let Some(export) = &mut self.export else {
            return;
        };

        if !export.requested {
            export.frames += 1;
            if export.frames >= FRAMES_BEFORE_CAPTURE {
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
                export.requested = true;
            }
            ctx.request_repaint();
            return;
        }

        let screenshot = ctx.input(|i| {
            i.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(screenshot) = screenshot else {
            ctx.request_repaint();
            return;
        };

        let outcome = save_png(&export.path, &screenshot).map(|()| export.path.clone());
        match &outcome {
            Ok(path) => log::info!("Saved chart to {}", path.display()),
            Err(e) => log::error!("Failed to save chart: {e:#}"),
        }
        // The receiver is gone only if main already returned.
        let _ = export.done.send(outcome);
        self.export = None;
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl eframe::App for SalaryViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            panels::title_bar(ui);
        });

        // ---- Bottom panel: sample info ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.chart);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::salary_plot(ui, &self.chart);
        });

        self.drive_export(ctx);
    }
}

/// Write a screenshot as an RGBA PNG.
pub fn save_png(path: &Path, screenshot: &ColorImage) -> Result<()> {
    let [width, height] = screenshot.size;
    image::save_buffer(
        path,
        screenshot.as_raw(),
        u32::try_from(width).context("image too wide")?,
        u32::try_from(height).context("image too tall")?,
        image::ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("writing PNG {}", path.display()))
}
