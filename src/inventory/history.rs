//! Undo/redo history of full collection snapshots.

use crate::asset::Asset;

/// Two stacks of deep collection snapshots.
///
/// Snapshots are whole-list value copies, so later mutation of the live
/// list can never corrupt a stored state. Cheap enough at inventory sizes;
/// a command/delta log would replace this if collections ever grew large.
///
/// The stacks are unbounded: every checkpoint since startup stays
/// undoable.
#[derive(Default)]
pub struct History {
    undo_stack: Vec<Vec<Asset>>,
    redo_stack: Vec<Vec<Asset>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current list as an undo point and clears the redo stack
    /// (a new mutation invalidates the undone branch).
    ///
    /// Callers must checkpoint *before* mutating, never after - otherwise
    /// undo would restore the post-mutation state.
    pub fn checkpoint(&mut self, current: &[Asset]) {
        self.redo_stack.clear();
        self.undo_stack.push(current.to_vec());
    }

    /// Pops the last undo point, pushing `current` onto the redo stack.
    /// Returns `None` (and records nothing) when there is nothing to undo.
    pub fn undo(&mut self, current: &[Asset]) -> Option<Vec<Asset>> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current.to_vec());
        Some(snapshot)
    }

    /// Symmetric to [`History::undo`], using the redo stack.
    pub fn redo(&mut self, current: &[Asset]) -> Option<Vec<Asset>> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current.to_vec());
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
