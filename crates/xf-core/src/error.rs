//! Error types for the inspector engine

use uuid::Uuid;

/// Errors raised by inspector operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InspectorError {
    #[error("selection is empty")]
    EmptySelection,
    #[error("object not found: {0}")]
    ObjectNotFound(Uuid),
    #[error("preferences: {0}")]
    Preferences(#[from] PreferenceError),
}

/// Preference persistence errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

pub type InspectorResult<T> = Result<T, InspectorError>;
