//! UI panels

mod hierarchy;
mod properties;

pub use hierarchy::HierarchyPanel;
pub use properties::PropertiesPanel;

use crate::config::SharedConfig;
use crate::state::SharedAppState;

/// Panel trait for dockable UI panels
pub trait Panel {
    /// Panel name for tab title
    fn name(&self) -> &str;

    /// Draw the panel UI
    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState, config: &SharedConfig);
}
