//! Inspector view-model
//!
//! [`build_view`] turns the current object states and display settings into
//! render instructions; [`apply_event`] turns one user event into mutations.
//! Neither depends on a GUI library.

use glam::Vec3;

use crate::angle::wrap_euler;
use crate::axis::{Axis, AxisMask, Component};
use crate::binding::PropertyBinding;
use crate::constants::TOLERANCE;
use crate::engine;
use crate::error::InspectorResult;
use crate::preferences::DisplaySettings;
use crate::selection::Selection;
use crate::transform::{TransformField, default_component};
use crate::undo::UndoService;

/// One numeric field in a row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldView {
    pub component: Component,
    /// Value of the primary object
    pub value: f32,
    /// Values differ across the selection; show a placeholder instead
    pub mixed: bool,
    /// Value equals the canonical default; draw with the muted color
    pub faded: bool,
}

/// One row: reset button followed by 1, 3 or 4 fields
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub field: TransformField,
    pub reset_enabled: bool,
    pub fields: Vec<FieldView>,
}

/// Render instructions for the whole transform inspector
#[derive(Debug, Clone, PartialEq)]
pub struct TransformView {
    pub position: RowView,
    pub rotation: RowView,
    pub scale: RowView,
    pub settings: DisplaySettings,
    /// Rotation axes masked because they differ across the selection
    pub divergent: AxisMask,
}

impl TransformView {
    pub fn rows(&self) -> [&RowView; 3] {
        [&self.position, &self.rotation, &self.scale]
    }
}

/// A single user interaction with the inspector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InspectorEvent {
    /// Reset button clicked
    Reset(TransformField),
    EditPosition { axis: Axis, value: f32 },
    /// Euler fields edited this frame; `values` is read only for axes in `edited`
    EditRotation { edited: AxisMask, values: Vec3 },
    EditQuaternion { component: Component, value: f32 },
    EditScale { axis: Axis, value: f32 },
    EditUniformScale(f32),
}

/// Build the render instructions for the current selection
pub fn build_view(
    binding: &dyn PropertyBinding,
    selection: &Selection,
    settings: &DisplaySettings,
) -> InspectorResult<TransformView> {
    let primary = binding.transform(selection.primary())?;

    let position = RowView {
        field: TransformField::Position,
        reset_enabled: engine::reset_enabled(binding, selection, TransformField::Position)?,
        fields: vector_fields(binding, selection, TransformField::Position, primary.position)?,
    };

    let euler = wrap_euler(primary.euler_degrees());
    let divergent = engine::compute_divergence(binding, selection, euler)?;

    let rotation_fields = if settings.quaternion_mode {
        let raw = primary.rotation.to_array();
        Component::QUATERNION
            .into_iter()
            .map(|component| -> InspectorResult<FieldView> {
                let value = raw[component.index()];
                Ok(FieldView {
                    component,
                    value,
                    mixed: binding.values_differ(selection, TransformField::Rotation, component)?,
                    faded: is_faded(TransformField::Rotation, component, value),
                })
            })
            .collect::<InspectorResult<Vec<_>>>()?
    } else {
        Axis::ALL
            .into_iter()
            .map(|axis| {
                let value = axis.get(euler);
                FieldView {
                    component: axis.into(),
                    value,
                    mixed: divergent.contains_axis(axis),
                    faded: is_faded(TransformField::Rotation, axis.into(), value),
                }
            })
            .collect()
    };
    let rotation = RowView {
        field: TransformField::Rotation,
        reset_enabled: engine::reset_enabled(binding, selection, TransformField::Rotation)?,
        fields: rotation_fields,
    };

    let scale_fields = if settings.uniform_scale {
        let value = primary.scale.x;
        let mut mixed = false;
        for axis in Axis::ALL {
            mixed |= binding.values_differ(selection, TransformField::Scale, axis.into())?;
        }
        // Non-uniform scale on the primary itself also has no single value
        mixed |= (primary.scale - Vec3::splat(value)).abs().max_element() > TOLERANCE;
        vec![FieldView {
            component: Component::X,
            value,
            mixed,
            faded: is_faded(TransformField::Scale, Component::X, value),
        }]
    } else {
        vector_fields(binding, selection, TransformField::Scale, primary.scale)?
    };
    let scale = RowView {
        field: TransformField::Scale,
        reset_enabled: engine::reset_enabled(binding, selection, TransformField::Scale)?,
        fields: scale_fields,
    };

    Ok(TransformView {
        position,
        rotation,
        scale,
        settings: *settings,
        divergent,
    })
}

/// Apply one user event; returns whether any object changed
pub fn apply_event(
    binding: &mut dyn PropertyBinding,
    undo: &mut dyn UndoService,
    selection: &Selection,
    event: InspectorEvent,
) -> InspectorResult<bool> {
    match event {
        InspectorEvent::Reset(field) => {
            engine::reset_field(binding, undo, selection, field)?;
            Ok(true)
        }
        InspectorEvent::EditPosition { axis, value } => engine::write_vector_component(
            binding,
            undo,
            selection,
            TransformField::Position,
            axis,
            value,
        ),
        InspectorEvent::EditRotation { edited, values } => {
            engine::reconcile_edit(binding, undo, selection, edited, values)
        }
        InspectorEvent::EditQuaternion { component, value } => {
            engine::write_quaternion_component(binding, undo, selection, component, value)?;
            Ok(true)
        }
        InspectorEvent::EditScale { axis, value } => engine::write_vector_component(
            binding,
            undo,
            selection,
            TransformField::Scale,
            axis,
            value,
        ),
        InspectorEvent::EditUniformScale(value) => {
            engine::write_uniform_scale(binding, undo, selection, value)?;
            Ok(true)
        }
    }
}

fn vector_fields(
    binding: &dyn PropertyBinding,
    selection: &Selection,
    field: TransformField,
    primary: Vec3,
) -> InspectorResult<Vec<FieldView>> {
    Axis::ALL
        .into_iter()
        .map(|axis| -> InspectorResult<FieldView> {
            let value = axis.get(primary);
            Ok(FieldView {
                component: axis.into(),
                value,
                mixed: binding.values_differ(selection, field, axis.into())?,
                faded: is_faded(field, axis.into(), value),
            })
        })
        .collect()
}

fn is_faded(field: TransformField, component: Component, value: f32) -> bool {
    (value - default_component(field, component)).abs() <= TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Scene;
    use crate::selection::ObjectId;
    use crate::transform::LocalTransform;
    use crate::undo::UndoHistory;

    fn two_objects(a: LocalTransform, b: LocalTransform) -> (Scene, Selection, [ObjectId; 2]) {
        let mut scene = Scene::new();
        let ia = scene.add("A", a);
        let ib = scene.add("B", b);
        let selection = Selection::new([ia, ib]).unwrap();
        (scene, selection, [ia, ib])
    }

    #[test]
    fn test_identity_view_is_faded() {
        let mut scene = Scene::new();
        let id = scene.add("A", LocalTransform::IDENTITY);
        let view = build_view(&scene, &Selection::single(id), &DisplaySettings::default()).unwrap();

        for row in view.rows() {
            assert!(!row.reset_enabled);
            assert_eq!(row.fields.len(), 3);
            assert!(row.fields.iter().all(|f| f.faded && !f.mixed));
        }
    }

    #[test]
    fn test_field_counts_per_mode() {
        let mut scene = Scene::new();
        let id = scene.add("A", LocalTransform::IDENTITY);
        let settings = DisplaySettings {
            quaternion_mode: true,
            uniform_scale: true,
        };
        let view = build_view(&scene, &Selection::single(id), &settings).unwrap();

        assert_eq!(view.position.fields.len(), 3);
        assert_eq!(view.rotation.fields.len(), 4);
        assert_eq!(view.scale.fields.len(), 1);
        assert_eq!(view.rotation.fields[3].component, Component::W);
        assert!(view.rotation.fields[3].faded);
    }

    #[test]
    fn test_divergent_rotation_axis_is_mixed() {
        let (scene, selection, _) = two_objects(
            LocalTransform::from_euler_degrees(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), Vec3::ONE),
            LocalTransform::from_euler_degrees(Vec3::ZERO, Vec3::new(0.0, 50.0, 0.0), Vec3::ONE),
        );
        let view = build_view(&scene, &selection, &DisplaySettings::default()).unwrap();

        assert_eq!(view.divergent, AxisMask::Y);
        let mixed: Vec<bool> = view.rotation.fields.iter().map(|f| f.mixed).collect();
        assert_eq!(mixed, vec![false, true, false]);
    }

    #[test]
    fn test_position_mixed_and_reset() {
        let (scene, selection, _) = two_objects(
            LocalTransform::IDENTITY,
            LocalTransform {
                position: Vec3::new(0.0, 0.0, 2.0),
                ..LocalTransform::IDENTITY
            },
        );
        let view = build_view(&scene, &selection, &DisplaySettings::default()).unwrap();

        assert!(view.position.reset_enabled);
        assert!(view.position.fields[2].mixed);
        assert!(!view.position.fields[0].mixed);
    }

    #[test]
    fn test_uniform_scale_round_trip_through_modes() {
        let mut scene = Scene::new();
        let id = scene.add(
            "A",
            LocalTransform {
                scale: Vec3::new(1.0, 2.0, 3.0),
                ..LocalTransform::IDENTITY
            },
        );
        let selection = Selection::single(id);
        let mut history = UndoHistory::new();
        let mut settings = DisplaySettings::default();

        // Toggling in and out of uniform mode leaves the stored scale alone
        settings.uniform_scale = true;
        let view = build_view(&scene, &selection, &settings).unwrap();
        assert!(view.scale.fields[0].mixed);
        settings.uniform_scale = false;
        build_view(&scene, &selection, &settings).unwrap();
        settings.uniform_scale = true;
        build_view(&scene, &selection, &settings).unwrap();
        assert_eq!(scene.transform(id).unwrap().scale, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(scene.revision(), 0);

        apply_event(
            &mut scene,
            &mut history,
            &selection,
            InspectorEvent::EditUniformScale(2.0),
        )
        .unwrap();
        assert_eq!(scene.transform(id).unwrap().scale, Vec3::new(2.0, 2.0, 2.0));

        let view = build_view(&scene, &selection, &settings).unwrap();
        assert_eq!(view.scale.fields[0].value, 2.0);
        assert!(!view.scale.fields[0].mixed);
    }

    #[test]
    fn test_apply_rotation_edit_and_undo() {
        let a = LocalTransform::from_euler_degrees(Vec3::ZERO, Vec3::new(5.0, 10.0, 15.0), Vec3::ONE);
        let b = LocalTransform::from_euler_degrees(Vec3::ZERO, Vec3::new(-5.0, 20.0, 0.0), Vec3::ONE);
        let (mut scene, selection, ids) = two_objects(a, b);
        let mut history = UndoHistory::new();

        let changed = apply_event(
            &mut scene,
            &mut history,
            &selection,
            InspectorEvent::EditRotation {
                edited: AxisMask::Z,
                values: Vec3::new(0.0, 0.0, 90.0),
            },
        )
        .unwrap();
        assert!(changed);

        let view = build_view(&scene, &selection, &DisplaySettings::default()).unwrap();
        assert!((view.rotation.fields[2].value - 90.0).abs() < 1e-3);
        assert!(view.divergent.contains_axis(Axis::X));

        history.undo(&mut scene).unwrap();
        assert_eq!(scene.transform(ids[0]).unwrap(), a);
        assert_eq!(scene.transform(ids[1]).unwrap(), b);
    }

    #[test]
    fn test_apply_empty_rotation_edit() {
        let (mut scene, selection, _) =
            two_objects(LocalTransform::IDENTITY, LocalTransform::IDENTITY);
        let mut history = UndoHistory::new();

        let changed = apply_event(
            &mut scene,
            &mut history,
            &selection,
            InspectorEvent::EditRotation {
                edited: AxisMask::empty(),
                values: Vec3::ZERO,
            },
        )
        .unwrap();

        assert!(!changed);
        assert!(history.is_empty());
        assert_eq!(scene.revision(), 0);
    }

    #[test]
    fn test_apply_reset_position() {
        let (mut scene, selection, ids) = two_objects(
            LocalTransform {
                position: Vec3::new(1.0, 1.0, 1.0),
                ..LocalTransform::IDENTITY
            },
            LocalTransform {
                position: Vec3::new(-4.0, 0.0, 9.0),
                ..LocalTransform::IDENTITY
            },
        );
        let mut history = UndoHistory::new();

        apply_event(
            &mut scene,
            &mut history,
            &selection,
            InspectorEvent::Reset(TransformField::Position),
        )
        .unwrap();

        for id in ids {
            assert_eq!(scene.transform(id).unwrap().position, Vec3::ZERO);
        }
        assert_eq!(history.len(), 1);
        assert_eq!(history.undo_label(), Some("Reset Position"));
    }
}
