//! Transform Inspector Core
//!
//! Engine behind the custom transform inspector: Euler-angle normalization,
//! per-axis divergence detection across a multi-object selection, and
//! reconciliation of edited values back into every selected object under a
//! single undo checkpoint.
//!
//! The host editor's collaborators are expressed as traits
//! ([`PropertyBinding`], [`UndoService`], [`PreferenceStore`]) with reference
//! implementations ([`Scene`], [`UndoHistory`], [`RonPreferenceStore`]).

pub mod angle;
pub mod axis;
pub mod binding;
pub mod constants;
pub mod engine;
pub mod error;
pub mod inspector;
pub mod preferences;
pub mod selection;
pub mod transform;
pub mod undo;

pub use angle::{wrap_angle, wrap_euler};
pub use axis::{Axis, AxisMask, Component};
pub use binding::{PropertyBinding, Scene, SceneObject};
pub use engine::{
    compute_divergence, parse_mixed_input, reconcile_edit, reset_enabled, reset_field,
    write_quaternion_component, write_uniform_scale, write_vector_component,
};
pub use error::{InspectorError, InspectorResult, PreferenceError};
pub use inspector::{FieldView, InspectorEvent, RowView, TransformView, apply_event, build_view};
pub use preferences::{DisplaySettings, MemoryPreferenceStore, PreferenceStore, RonPreferenceStore};
pub use selection::{ObjectId, Selection};
pub use transform::{FieldValue, LocalTransform, TransformField};
pub use undo::{Checkpoint, UndoHistory, UndoService};
