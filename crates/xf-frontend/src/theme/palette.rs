//! Inspector colors

use egui::Color32;
use xf_core::Component;

/// X axis label (red)
pub const AXIS_X: Color32 = Color32::from_rgb(226, 86, 74);
/// Y axis label (green)
pub const AXIS_Y: Color32 = Color32::from_rgb(122, 196, 84);
/// Z axis label (blue)
pub const AXIS_Z: Color32 = Color32::from_rgb(78, 142, 232);
/// Quaternion W label (yellow)
pub const AXIS_W: Color32 = Color32::from_rgb(232, 196, 72);

/// Values sitting at their canonical default
pub const FADED: Color32 = Color32::from_gray(118);
/// Placeholder shown in fields whose value differs across the selection
pub const MIXED: Color32 = Color32::from_gray(150);
/// Icon of an enabled reset button
pub const RESET: Color32 = Color32::from_rgb(214, 160, 90);
/// Background of numeric fields
pub const FIELD_BG: Color32 = Color32::from_rgb(40, 41, 46);
/// Inline error text in the properties panel
pub const ERROR: Color32 = Color32::from_rgb(220, 110, 100);

/// Label color for a displayed component
pub fn axis_color(component: Component) -> Color32 {
    match component {
        Component::X => AXIS_X,
        Component::Y => AXIS_Y,
        Component::Z => AXIS_Z,
        Component::W => AXIS_W,
    }
}

/// Axis color dimmed for fields at their default
pub fn faded_axis_color(component: Component) -> Color32 {
    axis_color(component).gamma_multiply(0.45)
}
