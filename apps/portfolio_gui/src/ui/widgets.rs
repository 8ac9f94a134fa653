//! Small presentation helpers shared across sections.

use egui::{Color32, CornerRadius, Margin, RichText, Stroke, Ui};

use crate::ui::theme;

/// The small uppercase label that introduces every section.
pub fn kicker(ui: &mut Ui, text: &str, color: Color32) {
    ui.label(
        RichText::new(spaced_caps(text))
            .size(11.0)
            .color(color)
            .strong(),
    );
}

pub fn section_heading(ui: &mut Ui, kicker_text: &str, title: &str) {
    kicker(ui, kicker_text, theme::ACCENT);
    ui.add_space(6.0);
    ui.label(RichText::new(title).size(26.0).color(theme::TEXT));
}

/// Approximates the site's letter-spaced captions.
fn spaced_caps(text: &str) -> String {
    let upper = text.to_uppercase();
    let mut spaced = String::with_capacity(upper.len() * 2);
    for (i, c) in upper.chars().enumerate() {
        if i > 0 {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    spaced
}

pub fn chip(ui: &mut Ui, text: &str) {
    egui::Frame::default()
        .fill(theme::PANEL)
        .stroke(Stroke::new(1.0, theme::ACCENT.gamma_multiply(0.3)))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(10.0).color(theme::TEXT));
        });
}

pub fn stat(ui: &mut Ui, figure: &str, label: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(figure).size(22.0).strong().color(theme::TEXT));
        ui.label(RichText::new(label).size(12.0).color(theme::MUTED));
    });
}

/// Text that behaves like an anchor: accent color, hand cursor, opens the
/// system browser.
pub fn link_text(ui: &mut Ui, label: &str, url: &str) {
    let response = ui
        .add(egui::Label::new(RichText::new(label).color(theme::ACCENT)).sense(egui::Sense::click()))
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    if response.clicked() {
        open_link(ui, url);
    }
}

pub fn open_link(ui: &Ui, url: &str) {
    tracing::debug!(url, "opening link in system browser");
    ui.ctx().open_url(egui::OpenUrl::new_tab(url));
}

/// Pill-shaped call-to-action button.
pub fn cta_button(ui: &mut Ui, label: &str, filled: bool) -> egui::Response {
    let (fill, text_color, stroke) = if filled {
        (theme::ACCENT, theme::ON_ACCENT, Stroke::NONE)
    } else {
        (
            theme::PANEL,
            theme::TEXT,
            Stroke::new(1.0, theme::ACCENT.gamma_multiply(0.4)),
        )
    };
    ui.add(
        egui::Button::new(RichText::new(spaced_caps(label)).size(11.0).color(text_color))
            .fill(fill)
            .stroke(stroke)
            .corner_radius(CornerRadius::same(16))
            .min_size(egui::vec2(0.0, 30.0)),
    )
}
