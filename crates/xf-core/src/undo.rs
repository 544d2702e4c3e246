//! Undo checkpoints for multi-object transform edits

use std::collections::VecDeque;

use crate::binding::PropertyBinding;
use crate::constants::MAX_HISTORY_SIZE;
use crate::error::InspectorResult;
use crate::selection::{ObjectId, Selection};
use crate::transform::LocalTransform;

/// Records revertible checkpoints before the inspector mutates objects
pub trait UndoService {
    /// Capture the current state of every object in `selection`
    ///
    /// Must be called before the first mutation of an edit.
    fn checkpoint(
        &mut self,
        binding: &dyn PropertyBinding,
        selection: &Selection,
        label: &str,
    ) -> InspectorResult<()>;
}

/// Snapshot of the transforms of a set of objects
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub label: String,
    pub snapshots: Vec<(ObjectId, LocalTransform)>,
}

impl Checkpoint {
    /// Capture the current transforms of the given objects
    pub fn capture(
        binding: &dyn PropertyBinding,
        ids: impl IntoIterator<Item = ObjectId>,
        label: impl Into<String>,
    ) -> InspectorResult<Self> {
        let snapshots = ids
            .into_iter()
            .map(|id| binding.transform(id).map(|t| (id, t)))
            .collect::<InspectorResult<Vec<_>>>()?;
        Ok(Self {
            label: label.into(),
            snapshots,
        })
    }

    /// Write the captured transforms back
    pub fn restore(&self, binding: &mut dyn PropertyBinding) -> InspectorResult<()> {
        for (id, transform) in &self.snapshots {
            binding.set_transform(*id, *transform)?;
        }
        Ok(())
    }

    fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.snapshots.iter().map(|(id, _)| *id)
    }
}

/// Bounded undo/redo history of transform checkpoints
///
/// While coalescing is enabled (e.g. during a drag), consecutive checkpoints
/// with the same label over the same objects collapse into the first one.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    undo_stack: VecDeque<Checkpoint>,
    redo_stack: Vec<Checkpoint>,
    coalescing: bool,
    group_open: bool,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Label of the checkpoint that the next undo would restore
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.back().map(|c| c.label.as_str())
    }

    /// Label of the checkpoint that the next redo would restore
    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.label.as_str())
    }

    /// Number of undoable checkpoints
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.group_open = false;
    }

    /// Enable or disable checkpoint coalescing; disabling closes the group
    pub fn set_coalescing(&mut self, enabled: bool) {
        self.coalescing = enabled;
        if !enabled {
            self.group_open = false;
        }
    }

    /// Revert the most recent checkpoint, returning its label
    pub fn undo(&mut self, binding: &mut dyn PropertyBinding) -> InspectorResult<Option<String>> {
        let Some(checkpoint) = self.undo_stack.pop_back() else {
            return Ok(None);
        };
        self.group_open = false;

        let current = match Checkpoint::capture(&*binding, checkpoint.ids(), &checkpoint.label) {
            Ok(current) => current,
            Err(e) => {
                self.undo_stack.push_back(checkpoint);
                return Err(e);
            }
        };
        checkpoint.restore(binding)?;

        tracing::debug!("Undo: {}", checkpoint.label);
        let label = checkpoint.label.clone();
        self.redo_stack.push(current);
        Ok(Some(label))
    }

    /// Re-apply the most recently undone checkpoint, returning its label
    pub fn redo(&mut self, binding: &mut dyn PropertyBinding) -> InspectorResult<Option<String>> {
        let Some(checkpoint) = self.redo_stack.pop() else {
            return Ok(None);
        };
        self.group_open = false;

        let current = match Checkpoint::capture(&*binding, checkpoint.ids(), &checkpoint.label) {
            Ok(current) => current,
            Err(e) => {
                self.redo_stack.push(checkpoint);
                return Err(e);
            }
        };
        checkpoint.restore(binding)?;

        tracing::debug!("Redo: {}", checkpoint.label);
        let label = checkpoint.label.clone();
        self.push_undo(current);
        Ok(Some(label))
    }

    fn push_undo(&mut self, checkpoint: Checkpoint) {
        self.undo_stack.push_back(checkpoint);
        while self.undo_stack.len() > MAX_HISTORY_SIZE {
            self.undo_stack.pop_front();
        }
    }
}

impl UndoService for UndoHistory {
    fn checkpoint(
        &mut self,
        binding: &dyn PropertyBinding,
        selection: &Selection,
        label: &str,
    ) -> InspectorResult<()> {
        if self.group_open
            && let Some(last) = self.undo_stack.back()
            && last.label == label
            && last.ids().eq(selection.iter())
        {
            return Ok(());
        }

        let checkpoint = Checkpoint::capture(binding, selection.iter(), label)?;
        self.push_undo(checkpoint);
        self.redo_stack.clear();
        self.group_open = self.coalescing;
        Ok(())
    }
}
