//! Transform component - position, rotation and scale editing

use std::collections::HashMap;

use egui::{Button, DragValue, Key, RichText, TextEdit, Ui, Vec2};
use glam::Vec3;

use xf_core::{
    AxisMask, Component, FieldView, InspectorEvent, RowView, TransformField, TransformView,
    apply_event, build_view, parse_mixed_input,
};

use crate::panels::properties::helpers::{rotation_row, vector3_row};
use crate::panels::properties::{PropertyComponent, PropertyContext};
use crate::theme::palette;

const RESET_BUTTON_SIZE: Vec2 = Vec2::new(18.0, 18.0);
const ROW_LABEL_WIDTH: f32 = 60.0;
const FIELD_WIDTH: f32 = 56.0;
const MIXED_PLACEHOLDER: &str = "—";

type FieldKey = (TransformField, Component);

/// Text typed into fields that currently show a mixed value
#[derive(Default)]
struct MixedInputs {
    buffers: HashMap<FieldKey, String>,
}

impl MixedInputs {
    fn buffer(&mut self, key: FieldKey) -> &mut String {
        self.buffers.entry(key).or_default()
    }

    /// Take the typed text; `None` when cancelled or not a number
    fn commit(&mut self, key: FieldKey, cancelled: bool) -> Option<f32> {
        let text = self.buffers.remove(&key)?;
        if cancelled {
            return None;
        }
        parse_mixed_input(&text)
    }

    /// Drop text left over from when the field was mixed
    fn forget(&mut self, key: FieldKey) {
        self.buffers.remove(&key);
    }
}

/// Transform component (position, rotation, scale)
#[derive(Default)]
pub struct TransformComponent {
    mixed_input: MixedInputs,
}

impl TransformComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom layout driven by the view-model
    fn inspector_ui(&mut self, ui: &mut Ui, view: &TransformView) -> Vec<InspectorEvent> {
        let mut events = Vec::new();

        for row in view.rows() {
            ui.horizontal(|ui| {
                let reset = ui
                    .add_enabled(
                        row.reset_enabled,
                        Button::new(RichText::new("↺").color(palette::RESET))
                            .min_size(RESET_BUTTON_SIZE),
                    )
                    .on_hover_text(format!("Reset {}", row.field.label()))
                    .on_disabled_hover_text(format!("{} is already at its default", row.field.label()));
                if reset.clicked() {
                    events.push(InspectorEvent::Reset(row.field));
                }

                ui.add_sized(
                    [ROW_LABEL_WIDTH, RESET_BUTTON_SIZE.y],
                    egui::Label::new(row.field.label()),
                );

                events.extend(self.row_fields(ui, row, view));
            });
        }

        events
    }

    fn row_fields(&mut self, ui: &mut Ui, row: &RowView, view: &TransformView) -> Vec<InspectorEvent> {
        let mut edits: Vec<(Component, f32)> = Vec::new();
        let uniform = row.field == TransformField::Scale && view.settings.uniform_scale;
        let angular = row.field == TransformField::Rotation && !view.settings.quaternion_mode;

        for field in &row.fields {
            let label = if uniform { "XYZ" } else { field.component.label() };
            let color = if field.faded {
                palette::faded_axis_color(field.component)
            } else {
                palette::axis_color(field.component)
            };
            ui.label(RichText::new(label).color(color).strong());

            if let Some(value) = self.field_ui(ui, row.field, field, angular) {
                edits.push((field.component, value));
            }
        }

        if edits.is_empty() {
            return Vec::new();
        }

        match row.field {
            TransformField::Position => edits
                .into_iter()
                .filter_map(|(component, value)| {
                    component
                        .axis()
                        .map(|axis| InspectorEvent::EditPosition { axis, value })
                })
                .collect(),
            TransformField::Rotation if view.settings.quaternion_mode => edits
                .into_iter()
                .map(|(component, value)| InspectorEvent::EditQuaternion { component, value })
                .collect(),
            TransformField::Rotation => {
                // All Euler edits of a frame go through one reconcile pass
                let mut edited = AxisMask::empty();
                let mut values = Vec3::ZERO;
                for (component, value) in edits {
                    if let Some(axis) = component.axis() {
                        edited.insert_axis(axis);
                        values = axis.with(values, value);
                    }
                }
                vec![InspectorEvent::EditRotation { edited, values }]
            }
            TransformField::Scale if uniform => edits
                .into_iter()
                .map(|(_, value)| InspectorEvent::EditUniformScale(value))
                .collect(),
            TransformField::Scale => edits
                .into_iter()
                .filter_map(|(component, value)| {
                    component
                        .axis()
                        .map(|axis| InspectorEvent::EditScale { axis, value })
                })
                .collect(),
        }
    }

    /// Draw one numeric field; returns the new value if the user committed one
    fn field_ui(
        &mut self,
        ui: &mut Ui,
        row: TransformField,
        field: &FieldView,
        angular: bool,
    ) -> Option<f32> {
        let text_color = field.faded.then_some(palette::FADED);
        let key = (row, field.component);

        if field.mixed {
            let buffer = self.mixed_input.buffer(key);
            let response = ui.scope(|ui| {
                ui.visuals_mut().override_text_color = text_color;
                ui.add(
                    TextEdit::singleline(buffer)
                        .hint_text(RichText::new(MIXED_PLACEHOLDER).color(palette::MIXED))
                        .desired_width(FIELD_WIDTH),
                )
            });
            if response.inner.lost_focus() {
                let cancelled = ui.input(|i| i.key_pressed(Key::Escape));
                return self.mixed_input.commit(key, cancelled);
            }
            return None;
        }
        self.mixed_input.forget(key);

        let mut value = field.value;
        let (speed, suffix) = match row {
            TransformField::Rotation if angular => (0.5, "°"),
            TransformField::Rotation => (0.005, ""),
            _ => (0.01, ""),
        };
        let response = ui.scope(|ui| {
            ui.visuals_mut().override_text_color = text_color;
            ui.add_sized(
                [FIELD_WIDTH, RESET_BUTTON_SIZE.y],
                DragValue::new(&mut value).speed(speed).suffix(suffix).max_decimals(4),
            )
        });
        response.inner.changed().then_some(value)
    }

    /// Raw layout with the primary object's values and no masking
    fn passthrough_ui(ui: &mut Ui, ctx: &PropertyContext) -> Vec<InspectorEvent> {
        let Some(object) = ctx.scene.get(ctx.selection.primary()) else {
            return Vec::new();
        };
        let mut position = object.transform.position;
        let mut rotation = object.transform.euler_degrees();
        let mut scale = object.transform.scale;

        let mut events = Vec::new();

        let changed = vector3_row(ui, "Position", &mut position, 0.01);
        events.extend(changed.axes().map(|axis| InspectorEvent::EditPosition {
            axis,
            value: axis.get(position),
        }));

        let edited = rotation_row(ui, "Rotation", &mut rotation, 1.0);
        if !edited.is_empty() {
            events.push(InspectorEvent::EditRotation {
                edited,
                values: rotation,
            });
        }

        let changed = vector3_row(ui, "Scale", &mut scale, 0.01);
        events.extend(changed.axes().map(|axis| InspectorEvent::EditScale {
            axis,
            value: axis.get(scale),
        }));

        events
    }
}

impl PropertyComponent for TransformComponent {
    fn name(&self) -> &str {
        "Transform"
    }

    fn ui(&mut self, ui: &mut Ui, ctx: &mut PropertyContext) -> bool {
        let events = if ctx.debug_passthrough {
            Self::passthrough_ui(ui, ctx)
        } else {
            match build_view(&*ctx.scene, ctx.selection, &ctx.settings) {
                Ok(view) => self.inspector_ui(ui, &view),
                Err(e) => {
                    ui.colored_label(palette::ERROR, e.to_string());
                    return false;
                }
            }
        };

        let mut changed = false;
        for event in events {
            match apply_event(&mut *ctx.scene, &mut *ctx.history, ctx.selection, event) {
                Ok(mutated) => changed |= mutated,
                Err(e) => tracing::warn!("Failed to apply {:?}: {}", event, e),
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: FieldKey = (TransformField::Position, Component::X);

    #[test]
    fn test_commit_parses_typed_text() {
        let mut inputs = MixedInputs::default();
        inputs.buffer(KEY).push_str(" 2.5 ");
        assert_eq!(inputs.commit(KEY, false), Some(2.5));
        assert!(inputs.buffer(KEY).is_empty());
    }

    #[test]
    fn test_escape_discards_typed_text() {
        let mut inputs = MixedInputs::default();
        inputs.buffer(KEY).push_str("7");
        assert_eq!(inputs.commit(KEY, true), None);
        assert!(inputs.buffer(KEY).is_empty());
    }

    #[test]
    fn test_unparsable_text_is_ignored() {
        let mut inputs = MixedInputs::default();
        inputs.buffer(KEY).push_str("abc");
        assert_eq!(inputs.commit(KEY, false), None);
    }

    #[test]
    fn test_forget_clears_stale_text() {
        let mut inputs = MixedInputs::default();
        inputs.buffer(KEY).push_str("4");
        inputs.forget(KEY);
        assert!(inputs.buffer(KEY).is_empty());
        assert_eq!(inputs.commit(KEY, false), None);
    }
}
