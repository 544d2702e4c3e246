//! Theme module for UI styling

pub mod palette;

use egui::{CornerRadius, Visuals};

/// Apply the editor theme to the egui context
///
/// Stock dark visuals, with compact fields for the inspector rows.
pub fn apply_theme(ctx: &egui::Context) {
    ctx.set_visuals(visuals());
}

fn visuals() -> Visuals {
    let mut v = Visuals::dark();
    v.text_edit_bg_color = Some(palette::FIELD_BG);
    for widget in [
        &mut v.widgets.inactive,
        &mut v.widgets.hovered,
        &mut v.widgets.active,
    ] {
        widget.corner_radius = CornerRadius::same(2);
    }
    v
}
