//! Axis divergence detection and edit reconciliation
//!
//! Every mutating operation records exactly one undo checkpoint covering the
//! whole selection before touching any object, then writes all selected
//! objects within the same call.

use glam::{Quat, Vec3};

use crate::angle::wrap_euler;
use crate::axis::{Axis, AxisMask, Component};
use crate::binding::PropertyBinding;
use crate::constants::TOLERANCE;
use crate::error::InspectorResult;
use crate::selection::Selection;
use crate::transform::{FieldValue, TransformField};
use crate::undo::UndoService;

/// Find the rotation axes whose Euler angle differs from `reference`
///
/// Objects are visited in selection order, skipping the primary. Iteration
/// stops as soon as every axis is marked. A single-object selection always
/// yields an empty mask.
pub fn compute_divergence(
    binding: &dyn PropertyBinding,
    selection: &Selection,
    reference: Vec3,
) -> InspectorResult<AxisMask> {
    let reference = wrap_euler(reference);
    let mut mask = AxisMask::empty();

    for id in selection.others() {
        let euler = wrap_euler(binding.transform(*id)?.euler_degrees());
        let delta = (euler - reference).abs();
        for axis in Axis::ALL {
            if axis.get(delta) > TOLERANCE {
                mask.insert_axis(axis);
            }
        }
        if mask.is_all() {
            break;
        }
    }
    Ok(mask)
}

/// Write edited Euler axes back into every selected object's rotation
///
/// Only axes in `edited` take their value from `values`; the other axes
/// keep each object's own angle. Returns `false` without recording a
/// checkpoint when nothing was edited.
pub fn reconcile_edit(
    binding: &mut dyn PropertyBinding,
    undo: &mut dyn UndoService,
    selection: &Selection,
    edited: AxisMask,
    values: Vec3,
) -> InspectorResult<bool> {
    if edited.is_empty() {
        return Ok(false);
    }

    undo.checkpoint(&*binding, selection, "Rotate")?;

    let mut updated = Vec::with_capacity(selection.len());
    for id in selection.iter() {
        let mut transform = binding.transform(id)?;
        let mut euler = transform.euler_degrees();
        for axis in edited.axes() {
            euler = axis.with(euler, axis.get(values));
        }
        transform.set_euler_degrees(euler);
        updated.push((id, transform));
    }
    for (id, transform) in updated {
        binding.set_transform(id, transform)?;
    }

    tracing::debug!(
        "Reconciled rotation axes {:?} on {} object(s)",
        edited,
        selection.len()
    );
    Ok(true)
}

/// Whether the reset button for `field` should be offered
///
/// True when any selected object differs from the canonical default by
/// more than [`TOLERANCE`].
pub fn reset_enabled(
    binding: &dyn PropertyBinding,
    selection: &Selection,
    field: TransformField,
) -> InspectorResult<bool> {
    for id in selection.iter() {
        if !field.is_default(&binding.transform(id)?) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Write the canonical default of `field` to the whole selection
///
/// Goes through the binding's multi-object write rather than per-axis
/// reconciliation.
pub fn reset_field(
    binding: &mut dyn PropertyBinding,
    undo: &mut dyn UndoService,
    selection: &Selection,
    field: TransformField,
) -> InspectorResult<()> {
    let label = format!("Reset {}", field.label());
    undo.checkpoint(&*binding, selection, &label)?;
    binding.write_field(selection, field.default_value())?;
    tracing::debug!("{} on {} object(s)", label, selection.len());
    Ok(())
}

/// Set one axis of the position or scale on every selected object
///
/// The other axes keep each object's own value. Rotation is rejected here;
/// use [`reconcile_edit`] or [`write_quaternion_component`].
pub fn write_vector_component(
    binding: &mut dyn PropertyBinding,
    undo: &mut dyn UndoService,
    selection: &Selection,
    field: TransformField,
    axis: Axis,
    value: f32,
) -> InspectorResult<bool> {
    if field == TransformField::Rotation {
        return Ok(false);
    }

    undo.checkpoint(&*binding, selection, field.label())?;

    let mut updated = Vec::with_capacity(selection.len());
    for id in selection.iter() {
        let mut transform = binding.transform(id)?;
        let new_value = match field.read(&transform) {
            FieldValue::Position(v) => FieldValue::Position(axis.with(v, value)),
            FieldValue::Scale(v) => FieldValue::Scale(axis.with(v, value)),
            other => other,
        };
        new_value.apply_to(&mut transform);
        updated.push((id, transform));
    }
    for (id, transform) in updated {
        binding.set_transform(id, transform)?;
    }
    Ok(true)
}

/// Broadcast a single scale value to all three axes of every object
pub fn write_uniform_scale(
    binding: &mut dyn PropertyBinding,
    undo: &mut dyn UndoService,
    selection: &Selection,
    value: f32,
) -> InspectorResult<()> {
    undo.checkpoint(&*binding, selection, "Scale")?;
    binding.write_field(selection, FieldValue::Scale(Vec3::splat(value)))
}

/// Set one raw quaternion component on every selected object
///
/// The result is renormalized; a degenerate quaternion becomes identity.
pub fn write_quaternion_component(
    binding: &mut dyn PropertyBinding,
    undo: &mut dyn UndoService,
    selection: &Selection,
    component: Component,
    value: f32,
) -> InspectorResult<()> {
    undo.checkpoint(&*binding, selection, "Rotate")?;

    let mut updated = Vec::with_capacity(selection.len());
    for id in selection.iter() {
        let mut transform = binding.transform(id)?;
        let mut raw = transform.rotation.to_array();
        raw[component.index()] = value;
        let rotation = Quat::from_array(raw);
        transform.set_rotation(if rotation.length_squared() > TOLERANCE {
            rotation.normalize()
        } else {
            Quat::IDENTITY
        });
        updated.push((id, transform));
    }
    for (id, transform) in updated {
        binding.set_transform(id, transform)?;
    }
    Ok(())
}

/// Parse text typed into a field that shows a mixed value
///
/// Anything that is not a finite number means "no change".
pub fn parse_mixed_input(text: &str) -> Option<f32> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
}
