//! # Undo/Redo History
//!
//! Snapshot-based time travel over the tracked slice of state. The engine
//! is generic and agnostic to what the snapshots mean: the store records
//! the pre-mutation tracked state on every edit, and undo/redo swap the
//! current state with the stacks.
//!
//! ## Design
//!
//! - `record` pushes the *pre-mutation* snapshot and clears the redo stack
//! - `undo` pops the most recent snapshot, pushing the current state onto
//!   the redo stack; `redo` is the symmetric inverse
//! - the undo stack is capped; oldest snapshots fall off first
//! - `clear` empties both stacks (used when switching the active resume so
//!   history never leaks across resumes)

/// Default cap on undo depth.
pub const MAX_HISTORY_LEVELS: usize = 50;

/// Bounded undo/redo stacks over state snapshots.
#[derive(Debug)]
pub struct History<T> {
    /// Pre-mutation snapshots, most recent last.
    undo_stack: Vec<T>,

    /// Undone states, most recent last.
    redo_stack: Vec<T>,

    /// Maximum undo depth (0 = unlimited).
    max_levels: usize,
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self::with_max_levels(MAX_HISTORY_LEVELS)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Record the state as it was *before* a mutation. Any redo future is
    /// invalidated.
    pub fn record(&mut self, snapshot: T) {
        self.undo_stack.push(snapshot);
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    /// Step back: returns the snapshot to restore, parking `current` on
    /// the redo stack. `None` when there is nothing to undo.
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward again: returns the snapshot to restore, parking
    /// `current` on the undo stack. `None` when there is nothing to redo.
    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop all history, both directions.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}
