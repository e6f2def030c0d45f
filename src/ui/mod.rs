// Shared widgets and the guide palette

use egui::{Color32, CornerRadius, Frame, Margin, Response, RichText, Stroke, Ui};

pub mod guide;

// Slate-and-white palette carried over from the page design
pub(crate) const PALETTE_INK: Color32 = Color32::from_rgb(15, 23, 42);
pub(crate) const PALETTE_SLATE: Color32 = Color32::from_rgb(71, 85, 105);
pub(crate) const PALETTE_PAPER: Color32 = Color32::from_rgb(248, 250, 252);
pub(crate) const PALETTE_BORDER: Color32 = Color32::from_rgb(226, 232, 240);
pub(crate) const PALETTE_SKY: Color32 = Color32::from_rgb(2, 132, 199);
pub(crate) const PALETTE_EMERALD: Color32 = Color32::from_rgb(5, 150, 105);

const DEFAULT_CARD_CORNER_RADIUS: u8 = 10;

/// Bordered card frame shared by tables, tiles, and the quiz.
pub(crate) fn card() -> Frame {
    Frame::new()
        .fill(Color32::WHITE)
        .stroke(Stroke::new(1.0, PALETTE_BORDER))
        .corner_radius(CornerRadius::same(DEFAULT_CARD_CORNER_RADIUS))
        .inner_margin(Margin::same(14))
}

/// Small rounded tag, used for the hero keyword and the quiz marker.
pub(crate) fn pill(ui: &mut Ui, text: &str) -> Response {
    Frame::new()
        .fill(PALETTE_PAPER)
        .stroke(Stroke::new(1.0, PALETTE_BORDER))
        .corner_radius(CornerRadius::same(DEFAULT_CARD_CORNER_RADIUS))
        .inner_margin(Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(12.0).color(PALETTE_SLATE));
        })
        .response
}

/// Checkmark bullet with an optional bold lead-in.
pub(crate) fn bullet(ui: &mut Ui, lead: &str, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("✔").color(PALETTE_EMERALD));
        if !lead.is_empty() {
            ui.label(RichText::new(lead).strong().color(PALETTE_INK));
        }
        ui.label(RichText::new(text).color(PALETTE_INK));
    });
}

pub(crate) fn section_heading(ui: &mut Ui, title: &str) {
    ui.add_space(18.0);
    ui.heading(RichText::new(title).color(PALETTE_INK).size(24.0));
    ui.add_space(8.0);
}
