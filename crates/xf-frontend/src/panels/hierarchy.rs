//! Object list panel

use xf_core::ObjectId;

use crate::config::SharedConfig;
use crate::panels::Panel;
use crate::state::{AppAction, SharedAppState};

/// Flat list of scene objects with multi-selection
#[derive(Default)]
pub struct HierarchyPanel;

impl HierarchyPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Panel for HierarchyPanel {
    fn name(&self) -> &str {
        "Hierarchy"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState, _config: &SharedConfig) {
        // Toolbar
        ui.horizontal(|ui| {
            if ui.button("+ Object").clicked() {
                app_state
                    .lock()
                    .queue_action(AppAction::AddObject { name: None });
            }
            let has_selection = app_state.lock().selection().is_some();
            if ui
                .add_enabled(has_selection, egui::Button::new("Delete"))
                .clicked()
            {
                app_state.lock().queue_action(AppAction::DeleteSelected);
            }
        });
        ui.separator();

        // Collect rows before rendering so the lock is not held across clicks
        let rows: Vec<(ObjectId, String, bool)> = {
            let state = app_state.lock();
            state
                .scene
                .objects()
                .iter()
                .map(|o| (o.id, o.name.clone(), state.is_selected(o.id)))
                .collect()
        };

        if rows.is_empty() {
            ui.weak("No objects");
            return;
        }

        let mut clicked = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (id, name, selected) in &rows {
                if ui.selectable_label(*selected, name).clicked() {
                    clicked = Some(*id);
                }
            }
        });

        if let Some(id) = clicked {
            let additive = ui.input(|i| i.modifiers.command || i.modifiers.shift);
            let action = if additive {
                AppAction::ToggleSelection(id)
            } else {
                AppAction::SelectObject(Some(id))
            };
            app_state.lock().queue_action(action);
        }
    }
}
