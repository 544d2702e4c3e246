//! Inspector command handlers

use crate::state::AppAction;

use super::ActionContext;

/// Handle the inspector menu toggles
pub fn handle_inspector_action(action: AppAction, ctx: &ActionContext) {
    match action {
        AppAction::ToggleDebugPassthrough => {
            let mut state = ctx.app_state.lock();
            state.debug_passthrough = !state.debug_passthrough;
            tracing::info!("Debug passthrough: {}", state.debug_passthrough);
        }
        AppAction::ToggleQuaternionMode => ctx.config.write().toggle_quaternion_mode(),
        AppAction::ToggleUniformScale => ctx.config.write().toggle_uniform_scale(),
        _ => {}
    }
}
