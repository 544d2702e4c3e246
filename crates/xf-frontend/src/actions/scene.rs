//! Selection and scene action handlers

use xf_core::ObjectId;

use crate::state::AppAction;

use super::ActionContext;

/// Handle selection and scene actions
pub fn handle_scene_action(action: AppAction, ctx: &ActionContext) {
    match action {
        AppAction::SelectObject(id) => handle_select_object(id, ctx),
        AppAction::ToggleSelection(id) => ctx.app_state.lock().toggle_selected(id),
        AppAction::SelectAll => ctx.app_state.lock().select_all(),
        AppAction::AddObject { name } => handle_add_object(name, ctx),
        AppAction::DeleteSelected => handle_delete_selected(ctx),
        _ => {}
    }
}

fn handle_select_object(id: Option<ObjectId>, ctx: &ActionContext) {
    let mut state = ctx.app_state.lock();
    if let Some(id) = id
        && state.scene.get(id).is_none()
    {
        tracing::warn!("Cannot select unknown object {}", id);
        return;
    }
    state.select(id);
}

fn handle_add_object(name: Option<String>, ctx: &ActionContext) {
    let mut state = ctx.app_state.lock();
    let id = state.add_object(name);
    if let Some(object) = state.scene.get(id) {
        tracing::info!("Added object: {}", object.name);
    }
}

fn handle_delete_selected(ctx: &ActionContext) {
    let removed = ctx.app_state.lock().delete_selected();
    if removed > 0 {
        tracing::info!("Deleted {} object(s)", removed);
    }
}
