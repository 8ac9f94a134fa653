//! Neon-on-dark palette matching the published site.

use egui::{Color32, CornerRadius, Margin, Stroke};

pub const BACKGROUND: Color32 = Color32::from_rgb(0x08, 0x10, 0x18);
pub const PANEL: Color32 = Color32::from_rgb(0x0b, 0x11, 0x1b);
pub const ACCENT: Color32 = Color32::from_rgb(0x5c, 0xf2, 0xff);
pub const ACCENT_ALT: Color32 = Color32::from_rgb(0x7b, 0x5c, 0xff);
pub const TEXT: Color32 = Color32::from_rgb(0xe6, 0xf0, 0xff);
pub const MUTED: Color32 = Color32::from_rgb(0x9f, 0xb3, 0xcc);
pub const ON_ACCENT: Color32 = Color32::from_rgb(0x08, 0x10, 0x18);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = PANEL;
    visuals.extreme_bg_color = PANEL;
    visuals.override_text_color = Some(TEXT);
    visuals.widgets.noninteractive.bg_fill = PANEL;
    visuals.widgets.inactive.bg_fill = PANEL;
    visuals.widgets.hovered.bg_fill = PANEL;
    visuals.selection.bg_fill = ACCENT_ALT.gamma_multiply(0.55);
    visuals.hyperlink_color = ACCENT;
    ctx.set_visuals(visuals);
}

/// The "glass card" look: dark panel, faint accent border, soft corners.
pub fn glow_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(PANEL)
        .stroke(Stroke::new(1.0, ACCENT.gamma_multiply(0.3)))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(18))
}

/// Flat variant for nested cards inside a glow frame.
pub fn inner_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(BACKGROUND.gamma_multiply(0.9))
        .stroke(Stroke::new(1.0, Color32::from_white_alpha(14)))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(12))
}
