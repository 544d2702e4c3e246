//! Main application module

mod dock;
mod menu;

use egui_dock::{DockArea, DockState, Style};

use crate::actions::{ActionContext, dispatch_action};
use crate::config::{SharedConfig, create_shared_config};
use crate::state::{AppAction, SharedAppState, create_shared_state};
use crate::theme::apply_theme;

pub use dock::{InspectorTabViewer, PanelType, create_dock_layout};
pub use menu::{MenuAction, render_menu_bar};

/// Main application
pub struct InspectorApp {
    dock_state: DockState<PanelType>,
    app_state: SharedAppState,
    config: SharedConfig,
}

impl InspectorApp {
    /// Create a new app
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        apply_theme(&cc.egui_ctx);

        Self {
            dock_state: create_dock_layout(),
            app_state: create_shared_state(),
            config: create_shared_config(),
        }
    }

    /// Process pending actions
    fn process_actions(&mut self) {
        let actions = self.app_state.lock().take_pending_actions();
        let ctx = ActionContext::new(&self.app_state, &self.config);

        for action in actions {
            dispatch_action(action, &ctx);
        }
    }

    /// Queue undo/redo from keyboard shortcuts
    fn handle_shortcuts(&self, ctx: &egui::Context) {
        let redo = egui::KeyboardShortcut::new(
            egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
            egui::Key::Z,
        );
        let undo = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);

        // Redo first: consume_shortcut ignores extra modifiers
        let action = ctx.input_mut(|i| {
            if i.consume_shortcut(&redo) {
                Some(AppAction::Redo)
            } else if i.consume_shortcut(&undo) {
                Some(AppAction::Undo)
            } else {
                None
            }
        });
        if let Some(action) = action {
            self.app_state.lock().queue_action(action);
        }
    }
}

impl eframe::App for InspectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        // Process pending actions
        self.process_actions();

        // A drag is one undo step
        let pointer_down = ctx.input(|i| i.pointer.any_down());
        self.app_state.lock().history.set_coalescing(pointer_down);

        // Menu bar
        if let Some(menu_action) = render_menu_bar(ctx, &self.app_state, &self.config) {
            match menu_action {
                MenuAction::ResetLayout => {
                    self.dock_state = create_dock_layout();
                }
            }
        }

        // Dock area
        DockArea::new(&mut self.dock_state)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show(
                ctx,
                &mut InspectorTabViewer {
                    app_state: &self.app_state,
                    config: &self.config,
                },
            );
    }
}
