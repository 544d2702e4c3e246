//! Application state module

use std::sync::Arc;

use glam::{Quat, Vec3};
use parking_lot::Mutex;

use xf_core::{LocalTransform, ObjectId, Scene, Selection, UndoHistory};

/// Actions that can be performed on the app state
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Selection actions
    /// Replace the selection (None clears it)
    SelectObject(Option<ObjectId>),
    /// Add or remove one object from the selection
    ToggleSelection(ObjectId),
    /// Select every object
    SelectAll,

    // Scene actions
    /// Create a new object at the origin
    AddObject { name: Option<String> },
    /// Delete every selected object
    DeleteSelected,

    // History actions
    Undo,
    Redo,

    // Inspector commands
    /// Show the raw field-by-field layout instead of the custom inspector
    ToggleDebugPassthrough,
    /// Switch rotation display between Euler angles and quaternion components
    ToggleQuaternionMode,
    /// Switch scale editing between per-axis and uniform
    ToggleUniformScale,
}

/// Application state
#[derive(Default)]
pub struct AppState {
    /// Inspected objects
    pub scene: Scene,
    /// Undo history for transform edits
    pub history: UndoHistory,
    /// Selected objects, in the order they were picked
    selected: Vec<ObjectId>,
    /// Session-only switch to bypass the custom inspector layout
    pub debug_passthrough: bool,
    /// Has unsaved changes
    pub modified: bool,
    /// Pending actions
    pending_actions: Vec<AppAction>,
}

impl AppState {
    /// Create an empty app state
    pub fn new() -> Self {
        Self::default()
    }

    /// App state with a few objects to inspect
    pub fn with_demo_scene() -> Self {
        let mut state = Self::new();
        state.scene.add("Cube", LocalTransform::IDENTITY);
        state.scene.add(
            "Pillar",
            LocalTransform {
                position: Vec3::new(2.0, 0.0, -1.0),
                rotation: Quat::from_rotation_y(30f32.to_radians()),
                scale: Vec3::new(0.5, 3.0, 0.5),
                ..LocalTransform::IDENTITY
            },
        );
        state.scene.add(
            "Ramp",
            LocalTransform::from_euler_degrees(
                Vec3::new(-2.0, 0.5, 1.0),
                Vec3::new(15.0, 30.0, -10.0),
                Vec3::ONE,
            ),
        );
        state
    }

    /// Current selection, if anything is selected
    pub fn selection(&self) -> Option<Selection> {
        Selection::new(self.selected.iter().copied()).ok()
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selected.contains(&id)
    }

    /// Replace the selection
    pub fn select(&mut self, id: Option<ObjectId>) {
        self.selected.clear();
        if let Some(id) = id {
            self.selected.push(id);
        }
    }

    /// Add `id` to the selection, or remove it if already selected
    pub fn toggle_selected(&mut self, id: ObjectId) {
        if let Some(index) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(index);
        } else {
            self.selected.push(id);
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.scene.objects().iter().map(|o| o.id).collect();
    }

    /// Add an object and select it
    pub fn add_object(&mut self, name: Option<String>) -> ObjectId {
        let name = name.unwrap_or_else(|| format!("Object {}", self.scene.len() + 1));
        let id = self.scene.add(name, LocalTransform::IDENTITY);
        self.select(Some(id));
        self.modified = true;
        id
    }

    /// Remove every selected object
    ///
    /// The undo history is cleared since its checkpoints may reference
    /// removed objects.
    pub fn delete_selected(&mut self) -> usize {
        let removed = std::mem::take(&mut self.selected)
            .into_iter()
            .filter(|id| self.scene.remove(*id).is_some())
            .count();
        if removed > 0 {
            self.history.clear();
            self.modified = true;
        }
        removed
    }

    /// Queue an action
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Take pending actions
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }
}

/// Shared state handle
pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create shared app state populated with the demo scene
pub fn create_shared_state() -> SharedAppState {
    Arc::new(Mutex::new(AppState::with_demo_scene()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_keeps_pick_order() {
        let mut state = AppState::with_demo_scene();
        let ids: Vec<_> = state.scene.objects().iter().map(|o| o.id).collect();

        state.select(Some(ids[2]));
        state.toggle_selected(ids[0]);

        let selection = state.selection().unwrap();
        assert_eq!(selection.primary(), ids[2]);
        assert_eq!(selection.others(), &[ids[0]]);

        state.toggle_selected(ids[2]);
        assert_eq!(state.selection().unwrap().primary(), ids[0]);
    }

    #[test]
    fn test_empty_selection() {
        let mut state = AppState::with_demo_scene();
        state.select(None);
        assert!(state.selection().is_none());
    }

    #[test]
    fn test_delete_selected() {
        let mut state = AppState::with_demo_scene();
        state.select_all();
        assert_eq!(state.delete_selected(), 3);
        assert!(state.scene.is_empty());
        assert!(state.selection().is_none());
    }

    #[test]
    fn test_add_object_selects_it() {
        let mut state = AppState::new();
        let id = state.add_object(None);
        assert_eq!(state.selection().unwrap().primary(), id);
        assert_eq!(state.scene.get(id).unwrap().name, "Object 1");
    }
}
