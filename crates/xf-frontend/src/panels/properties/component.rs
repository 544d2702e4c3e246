//! PropertyComponent trait definition for Unity-style Inspector components

use egui::Ui;
use xf_core::{DisplaySettings, Scene, Selection, UndoHistory};

/// Context passed to property components for rendering
pub struct PropertyContext<'a> {
    /// Objects being edited
    pub scene: &'a mut Scene,
    /// Checkpoints are recorded here before every mutation
    pub history: &'a mut UndoHistory,
    pub selection: &'a Selection,
    pub settings: DisplaySettings,
    /// Draw the raw field layout instead of the custom one
    pub debug_passthrough: bool,
}

/// Trait for property panel components (Unity-style Inspector sections)
pub trait PropertyComponent {
    /// Component display name shown in the header
    fn name(&self) -> &str;

    /// Render the component UI
    /// Returns true if any value was changed
    fn ui(&mut self, ui: &mut Ui, ctx: &mut PropertyContext) -> bool;

    /// Whether this component is collapsible (default: true)
    fn is_collapsible(&self) -> bool {
        true
    }

    /// Whether the component is open by default (default: true)
    fn default_open(&self) -> bool {
        true
    }
}
