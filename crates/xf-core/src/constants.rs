//! Global constants for xf-core

/// Numeric tolerance used for divergence checks and default comparisons
pub const TOLERANCE: f32 = 1e-5;

/// Maximum number of undo checkpoints kept by [`crate::UndoHistory`]
pub const MAX_HISTORY_SIZE: usize = 50;

/// Preference key for the quaternion rotation display mode
pub const QUATERNION_MODE_KEY: &str = "xf.inspector.quaternion_mode";

/// Preference key for the uniform scale display mode
pub const UNIFORM_SCALE_KEY: &str = "xf.inspector.uniform_scale";
