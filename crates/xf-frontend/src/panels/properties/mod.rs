//! Properties panel with Unity-style component system

mod component;
mod components;
mod helpers;

pub use component::{PropertyComponent, PropertyContext};

use components::TransformComponent;

use crate::config::SharedConfig;
use crate::panels::Panel;
use crate::state::{AppState, SharedAppState};

/// Properties panel for editing the selected objects
pub struct PropertiesPanel {
    transform: TransformComponent,
}

impl PropertiesPanel {
    pub fn new() -> Self {
        Self {
            transform: TransformComponent::new(),
        }
    }
}

impl Default for PropertiesPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for PropertiesPanel {
    fn name(&self) -> &str {
        "Properties"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState, config: &SharedConfig) {
        let settings = config.read().settings();
        let mut state = app_state.lock();

        let Some(selection) = state.selection() else {
            ui.weak("No object selected");
            return;
        };

        // Header
        if selection.is_multi() {
            ui.heading(format!("{} Objects", selection.len()));
        } else {
            let name = state
                .scene
                .get(selection.primary())
                .map(|o| o.name.clone())
                .unwrap_or_default();
            ui.heading(name);
        }
        ui.separator();

        let AppState {
            scene,
            history,
            debug_passthrough,
            modified,
            ..
        } = &mut *state;

        let mut ctx = PropertyContext {
            scene,
            history,
            selection: &selection,
            settings,
            debug_passthrough: *debug_passthrough,
        };

        if render_component(ui, &mut self.transform, &mut ctx) {
            *modified = true;
        }
    }
}

/// Render a component with collapsible header
/// Returns true if the component reported a change
fn render_component(
    ui: &mut egui::Ui,
    component: &mut dyn PropertyComponent,
    ctx: &mut PropertyContext,
) -> bool {
    let changed = if component.is_collapsible() {
        let response = egui::CollapsingHeader::new(component.name())
            .default_open(component.default_open())
            .show(ui, |ui| component.ui(ui, ctx));
        response.body_returned.unwrap_or(false)
    } else {
        ui.heading(component.name());
        component.ui(ui, ctx)
    };
    ui.separator();
    changed
}
