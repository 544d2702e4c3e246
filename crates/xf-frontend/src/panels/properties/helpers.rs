//! Common UI helper functions for property components

use egui::{DragValue, Ui};
use glam::Vec3;
use xf_core::{Axis, AxisMask};

/// Render a labeled XYZ vector3 row with drag values
/// Returns the axes whose value was changed
pub fn vector3_row(ui: &mut Ui, label: &str, values: &mut Vec3, speed: f32) -> AxisMask {
    axis_row(ui, label, values, speed, "")
}

/// Render rotation row with degree suffix
/// Returns the axes whose value was changed
pub fn rotation_row(ui: &mut Ui, label: &str, rot_deg: &mut Vec3, speed: f32) -> AxisMask {
    axis_row(ui, label, rot_deg, speed, "°")
}

fn axis_row(ui: &mut Ui, label: &str, values: &mut Vec3, speed: f32, suffix: &str) -> AxisMask {
    ui.horizontal(|ui| {
        ui.label(label);
    });
    ui.horizontal(|ui| {
        let mut changed = AxisMask::empty();
        for axis in Axis::ALL {
            let mut value = axis.get(*values);
            ui.label(xf_core::Component::from(axis).label());
            if ui
                .add(DragValue::new(&mut value).speed(speed).suffix(suffix))
                .changed()
            {
                *values = axis.with(*values, value);
                changed.insert_axis(axis);
            }
        }
        changed
    })
    .inner
}
