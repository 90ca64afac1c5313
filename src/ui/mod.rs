//! Side-effecting half of the viewer: everything that draws with egui.

pub mod panels;
pub mod plot;
