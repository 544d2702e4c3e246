//! Action handling module
//!
//! Actions are queued in AppState and processed each frame.

mod history;
mod inspector;
mod scene;

use crate::config::SharedConfig;
use crate::state::{AppAction, SharedAppState};

pub use history::handle_history_action;
pub use inspector::handle_inspector_action;
pub use scene::handle_scene_action;

/// Context for action handlers
pub struct ActionContext<'a> {
    pub app_state: &'a SharedAppState,
    pub config: &'a SharedConfig,
}

impl<'a> ActionContext<'a> {
    pub fn new(app_state: &'a SharedAppState, config: &'a SharedConfig) -> Self {
        Self { app_state, config }
    }
}

/// Dispatch an action to the appropriate handler
pub fn dispatch_action(action: AppAction, ctx: &ActionContext) {
    match action {
        // Selection and scene actions
        AppAction::SelectObject(_)
        | AppAction::ToggleSelection(_)
        | AppAction::SelectAll
        | AppAction::AddObject { .. }
        | AppAction::DeleteSelected => {
            handle_scene_action(action, ctx);
        }

        // History actions
        AppAction::Undo | AppAction::Redo => {
            handle_history_action(action, ctx);
        }

        // Inspector commands
        AppAction::ToggleDebugPassthrough
        | AppAction::ToggleQuaternionMode
        | AppAction::ToggleUniformScale => {
            handle_inspector_action(action, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec3;
    use parking_lot::{Mutex, RwLock};
    use xf_core::{InspectorEvent, MemoryPreferenceStore, apply_event};

    use super::*;
    use crate::config::ConfigManager;
    use crate::state::AppState;

    fn context() -> (SharedAppState, SharedConfig) {
        let app_state = Arc::new(Mutex::new(AppState::with_demo_scene()));
        let config = Arc::new(RwLock::new(ConfigManager::with_store(Box::new(
            MemoryPreferenceStore::new(),
        ))));
        (app_state, config)
    }

    #[test]
    fn test_undo_redo_dispatch() {
        let (app_state, config) = context();
        let ctx = ActionContext::new(&app_state, &config);

        let id = {
            let mut state = app_state.lock();
            state.select_all();
            let selection = state.selection().unwrap();
            let AppState { scene, history, .. } = &mut *state;
            apply_event(
                scene,
                history,
                &selection,
                InspectorEvent::EditUniformScale(4.0),
            )
            .unwrap();
            selection.primary()
        };

        dispatch_action(AppAction::Undo, &ctx);
        assert_eq!(app_state.lock().scene.get(id).unwrap().transform.scale, Vec3::ONE);

        dispatch_action(AppAction::Redo, &ctx);
        assert_eq!(
            app_state.lock().scene.get(id).unwrap().transform.scale,
            Vec3::splat(4.0)
        );
    }

    #[test]
    fn test_toggle_commands() {
        let (app_state, config) = context();
        let ctx = ActionContext::new(&app_state, &config);

        dispatch_action(AppAction::ToggleQuaternionMode, &ctx);
        dispatch_action(AppAction::ToggleUniformScale, &ctx);
        dispatch_action(AppAction::ToggleDebugPassthrough, &ctx);

        let settings = config.read().settings();
        assert!(settings.quaternion_mode);
        assert!(settings.uniform_scale);
        assert!(app_state.lock().debug_passthrough);
    }

    #[test]
    fn test_selection_dispatch() {
        let (app_state, config) = context();
        let ctx = ActionContext::new(&app_state, &config);
        let ids: Vec<_> = app_state
            .lock()
            .scene
            .objects()
            .iter()
            .map(|o| o.id)
            .collect();

        dispatch_action(AppAction::SelectObject(Some(ids[1])), &ctx);
        dispatch_action(AppAction::ToggleSelection(ids[0]), &ctx);

        let selection = app_state.lock().selection().unwrap();
        assert_eq!(selection.ids(), &[ids[1], ids[0]]);
    }
}
