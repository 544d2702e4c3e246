//! Menu bar rendering

use crate::config::SharedConfig;
use crate::state::{AppAction, SharedAppState};

/// Render the menu bar and return any triggered action
pub fn render_menu_bar(
    ctx: &egui::Context,
    app_state: &SharedAppState,
    config: &SharedConfig,
) -> Option<MenuAction> {
    let mut menu_action = None;

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                let (undo_label, redo_label) = {
                    let state = app_state.lock();
                    (
                        state.history.undo_label().map(|l| format!("Undo {}", l)),
                        state.history.redo_label().map(|l| format!("Redo {}", l)),
                    )
                };

                let undo = egui::Button::new(undo_label.as_deref().unwrap_or("Undo"))
                    .shortcut_text("Ctrl+Z");
                if ui.add_enabled(undo_label.is_some(), undo).clicked() {
                    app_state.lock().queue_action(AppAction::Undo);
                    ui.close_menu();
                }
                let redo = egui::Button::new(redo_label.as_deref().unwrap_or("Redo"))
                    .shortcut_text("Ctrl+Shift+Z");
                if ui.add_enabled(redo_label.is_some(), redo).clicked() {
                    app_state.lock().queue_action(AppAction::Redo);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Select All").clicked() {
                    app_state.lock().queue_action(AppAction::SelectAll);
                    ui.close_menu();
                }
            });

            ui.menu_button("Scene", |ui| {
                if ui.button("Add Object").clicked() {
                    app_state
                        .lock()
                        .queue_action(AppAction::AddObject { name: None });
                    ui.close_menu();
                }
                if ui.button("Delete Selected").clicked() {
                    app_state.lock().queue_action(AppAction::DeleteSelected);
                    ui.close_menu();
                }
            });

            ui.menu_button("Inspector", |ui| {
                let settings = config.read().settings();
                let mut debug_passthrough = app_state.lock().debug_passthrough;
                let mut quaternion_mode = settings.quaternion_mode;
                let mut uniform_scale = settings.uniform_scale;

                if ui
                    .checkbox(&mut debug_passthrough, "Debug Passthrough")
                    .clicked()
                {
                    app_state.lock().queue_action(AppAction::ToggleDebugPassthrough);
                    ui.close_menu();
                }
                if ui
                    .checkbox(&mut quaternion_mode, "Quaternion Rotation")
                    .clicked()
                {
                    app_state.lock().queue_action(AppAction::ToggleQuaternionMode);
                    ui.close_menu();
                }
                if ui.checkbox(&mut uniform_scale, "Uniform Scaling").clicked() {
                    app_state.lock().queue_action(AppAction::ToggleUniformScale);
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Layout").clicked() {
                    menu_action = Some(MenuAction::ResetLayout);
                    ui.close_menu();
                }
            });
        });
    });

    menu_action
}

/// Actions triggered by the menu
pub enum MenuAction {
    ResetLayout,
}
