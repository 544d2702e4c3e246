//! Undo/redo action handlers

use crate::state::{AppAction, AppState};

use super::ActionContext;

/// Handle undo and redo
pub fn handle_history_action(action: AppAction, ctx: &ActionContext) {
    let mut state = ctx.app_state.lock();
    let AppState { scene, history, .. } = &mut *state;

    let result = match action {
        AppAction::Undo => history.undo(scene),
        AppAction::Redo => history.redo(scene),
        _ => return,
    };

    match result {
        Ok(Some(label)) => {
            tracing::info!("{:?}: {}", action, label);
            state.modified = true;
        }
        Ok(None) => {}
        Err(e) => tracing::error!("{:?} failed: {}", action, e),
    }
}
