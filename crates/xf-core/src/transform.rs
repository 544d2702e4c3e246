//! Local transform snapshot and per-field values

use glam::{DQuat, DVec3, EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::axis::Component;
use crate::constants::TOLERANCE;

/// Euler order used for display and write-back
pub const EULER_ORDER: EulerRot = EulerRot::XYZ;

/// Position, rotation and scale relative to the parent node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocalTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    /// Euler angles in degrees last written through [`Self::set_euler_degrees`]
    ///
    /// Only trusted while it still produces `rotation` exactly; any other
    /// write to `rotation` makes it stale.
    #[serde(skip)]
    pub euler_hint: Option<Vec3>,
}

impl PartialEq for LocalTransform {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.rotation == other.rotation
            && self.scale == other.scale
    }
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl LocalTransform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
        euler_hint: None,
    };

    /// Create a transform from a position, Euler angles in degrees and a scale
    pub fn from_euler_degrees(position: Vec3, euler: Vec3, scale: Vec3) -> Self {
        let mut transform = Self {
            position,
            scale,
            ..Self::IDENTITY
        };
        transform.set_euler_degrees(euler);
        transform
    }

    /// Rotation as XYZ Euler angles in degrees
    ///
    /// Returns the angles last written with [`Self::set_euler_degrees`] while
    /// they still describe the stored rotation, so repeated read-modify-write
    /// cycles leave untouched axes bit-identical. Otherwise the quaternion
    /// is decomposed in double precision.
    pub fn euler_degrees(&self) -> Vec3 {
        if let Some(hint) = self.euler_hint
            && rotation_from_euler_degrees(hint) == self.rotation
        {
            return hint;
        }
        let (x, y, z) = self.rotation.as_dquat().to_euler(EULER_ORDER);
        DVec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees()).as_vec3()
    }

    /// Replace the rotation from XYZ Euler angles in degrees
    pub fn set_euler_degrees(&mut self, euler: Vec3) {
        self.rotation = rotation_from_euler_degrees(euler);
        self.euler_hint = Some(euler);
    }

    /// Replace the rotation with a quaternion, dropping the Euler hint
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.euler_hint = None;
    }
}

/// Convert XYZ Euler angles in degrees into a quaternion
pub fn rotation_from_euler_degrees(euler: Vec3) -> Quat {
    let euler = euler.as_dvec3();
    DQuat::from_euler(
        EULER_ORDER,
        euler.x.to_radians(),
        euler.y.to_radians(),
        euler.z.to_radians(),
    )
    .as_quat()
}

/// The three editable fields of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformField {
    Position,
    Rotation,
    Scale,
}

impl TransformField {
    pub const ALL: [TransformField; 3] = [
        TransformField::Position,
        TransformField::Rotation,
        TransformField::Scale,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransformField::Position => "Position",
            TransformField::Rotation => "Rotation",
            TransformField::Scale => "Scale",
        }
    }

    /// Canonical default written by the reset button
    pub fn default_value(self) -> FieldValue {
        match self {
            TransformField::Position => FieldValue::Position(Vec3::ZERO),
            TransformField::Rotation => FieldValue::Rotation(Quat::IDENTITY),
            TransformField::Scale => FieldValue::Scale(Vec3::ONE),
        }
    }

    /// Read this field from a transform
    pub fn read(self, transform: &LocalTransform) -> FieldValue {
        match self {
            TransformField::Position => FieldValue::Position(transform.position),
            TransformField::Rotation => FieldValue::Rotation(transform.rotation),
            TransformField::Scale => FieldValue::Scale(transform.scale),
        }
    }

    /// Whether the field of `transform` equals its canonical default
    pub fn is_default(self, transform: &LocalTransform) -> bool {
        self.read(transform).approx_eq(&self.default_value())
    }
}

/// A typed value for one transform field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Position(Vec3),
    Rotation(Quat),
    Scale(Vec3),
}

impl FieldValue {
    pub fn field(&self) -> TransformField {
        match self {
            FieldValue::Position(_) => TransformField::Position,
            FieldValue::Rotation(_) => TransformField::Rotation,
            FieldValue::Scale(_) => TransformField::Scale,
        }
    }

    /// Write this value into the matching field of `transform`
    pub fn apply_to(self, transform: &mut LocalTransform) {
        match self {
            FieldValue::Position(v) => transform.position = v,
            FieldValue::Rotation(q) => transform.set_rotation(q),
            FieldValue::Scale(v) => transform.scale = v,
        }
    }

    /// Read a single component; `None` for W on vector fields
    pub fn component(&self, component: Component) -> Option<f32> {
        match (self, component.axis()) {
            (FieldValue::Position(v) | FieldValue::Scale(v), Some(axis)) => Some(axis.get(*v)),
            (FieldValue::Position(_) | FieldValue::Scale(_), None) => None,
            (FieldValue::Rotation(q), _) => Some(q.to_array()[component.index()]),
        }
    }

    /// Component-wise comparison within [`TOLERANCE`]
    ///
    /// Rotations compare equal when they describe the same orientation,
    /// so `q` and `-q` match.
    pub fn approx_eq(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Position(a), FieldValue::Position(b))
            | (FieldValue::Scale(a), FieldValue::Scale(b)) => a.abs_diff_eq(*b, TOLERANCE),
            (FieldValue::Rotation(a), FieldValue::Rotation(b)) => {
                a.abs_diff_eq(*b, TOLERANCE) || a.abs_diff_eq(-*b, TOLERANCE)
            }
            _ => false,
        }
    }
}

/// Default value of one displayed component of a field
///
/// Euler components of the identity rotation are all zero, which matches
/// the X/Y/Z components of the identity quaternion.
pub fn default_component(field: TransformField, component: Component) -> f32 {
    field.default_value().component(component).unwrap_or(0.0)
}
