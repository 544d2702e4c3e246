//! Transform Inspector Frontend
//!
//! egui-based editor hosting the custom transform inspector panel.

pub mod actions;
pub mod app;
pub mod config;
pub mod panels;
pub mod state;
pub mod theme;

// Re-exports for convenience
pub use app::InspectorApp;
pub use config::{ConfigManager, SharedConfig};
pub use state::{AppAction, AppState, SharedAppState};
