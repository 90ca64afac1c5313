use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Light green used for the histogram bars.
pub const LIGHT_GREEN: Color32 = Color32::from_rgb(144, 238, 144);

/// Bar opacity, 0.0 – 1.0.
pub const BAR_ALPHA: f32 = 0.7;

/// Histogram fill: [`LIGHT_GREEN`] at [`BAR_ALPHA`].
pub fn bar_fill() -> Color32 {
    with_alpha(LIGHT_GREEN, BAR_ALPHA)
}

pub const BAR_OUTLINE: Color32 = Color32::BLACK;
pub const CURVE: Color32 = Color32::BLACK;
pub const MEAN_LINE: Color32 = Color32::RED;
/// Matplotlib's "green" (#008000), not egui's brighter `Color32::GREEN`.
pub const PERCENTILE_LINE: Color32 = Color32::from_rgb(0, 128, 0);

/// Apply an opacity to an opaque colour.
pub fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}
