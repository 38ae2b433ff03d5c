//! # Store Facade
//!
//! The single composed object exposed to consumers: state + history +
//! autosave + persistence + subscriptions. All mutation goes through here
//! so the cross-cutting concerns fire uniformly:
//!
//! ```text
//! action → record pre-state → slice reducer → dirty + autosave arm
//!        → persistence queue → notify subscribers
//! ```
//!
//! Everything is synchronous on the caller's thread. The two timers
//! (autosave, persistence flush) are poll-driven: the host calls
//! [`Store::tick`] from its event loop.

use std::time::Instant;

use chrono::Utc;
use tracing::debug;

use cvforge_model::{sample_resume, ResumeDocument, ResumeSnapshot, SavedResume};
use cvforge_persist::{PersistError, PersistedState, PersistenceEngine};

use crate::{Debounce, History, Mutation, StoreError, StoreState};

pub type SubscriptionId = u64;

/// Name given to a resume created without one.
const DEFAULT_RESUME_NAME: &str = "Untitled resume";

pub struct Store {
    state: StoreState,
    history: History<ResumeSnapshot>,
    autosave: Debounce,
    persistence: Option<PersistenceEngine>,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&StoreState)>)>,
    next_subscription: SubscriptionId,
}

impl Store {
    /// In-memory store with no persistence attached.
    pub fn new() -> Self {
        Self {
            state: StoreState::default(),
            history: History::new(),
            autosave: Debounce::default(),
            persistence: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Store that queues every state change into the given engine.
    pub fn with_persistence(engine: PersistenceEngine) -> Self {
        let mut store = Self::new();
        store.persistence = Some(engine);
        store
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    // ---- subscriptions ----------------------------------------------------

    /// Register a callback invoked after every state change.
    pub fn subscribe(&mut self, callback: impl FnMut(&StoreState) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    // ---- tracked mutations ------------------------------------------------

    /// Apply a tracked mutation through the history engine.
    pub fn apply(&mut self, mutation: Mutation) {
        self.tracked_change(|state| mutation.apply(state));
    }

    /// Step the tracked state back one edit. Returns whether anything
    /// happened.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.undo(self.state.tracked()) else {
            return false;
        };
        self.state.restore(previous);
        self.mark_dirty();
        self.after_change();
        true
    }

    /// Symmetric inverse of [`Store::undo`].
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.redo(self.state.tracked()) else {
            return false;
        };
        self.state.restore(next);
        self.mark_dirty();
        self.after_change();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_levels(&self) -> usize {
        self.history.undo_levels()
    }

    pub fn redo_levels(&self) -> usize {
        self.history.redo_levels()
    }

    // ---- multi-resume catalog ---------------------------------------------

    /// Switch the working copy to a saved resume. The previously active
    /// entry is synchronized first so no edits are silently lost; history
    /// never leaks across resumes.
    pub fn load_resume(&mut self, id: &str) -> bool {
        let Some(index) = self.state.saved_resumes.iter().position(|s| s.id == id) else {
            return false;
        };
        self.sync_active();

        let snapshot = self.state.saved_resumes[index].snapshot.clone();
        self.state.restore(snapshot);
        self.state.active_resume_id = Some(id.to_string());
        self.history.clear();
        self.settle_saved();
        self.after_change();
        true
    }

    /// Create an empty resume, make it active, and return its id.
    pub fn create_resume(&mut self, name: Option<&str>) -> String {
        self.sync_active();
        self.state.restore(ResumeSnapshot::default());

        let entry = SavedResume::new(name.unwrap_or(DEFAULT_RESUME_NAME), self.state.tracked());
        let id = entry.id.clone();
        self.state.saved_resumes.push(entry);
        self.state.active_resume_id = Some(id.clone());
        self.history.clear();
        self.settle_saved();
        self.after_change();
        id
    }

    /// Clone a saved resume under a new id and a "(copy)" name. The active
    /// resume and the working copy are untouched.
    pub fn duplicate_resume(&mut self, id: &str) -> Option<String> {
        let entry = self.state.saved_resumes.iter().find(|s| s.id == id)?;
        let copy = entry.duplicate();
        let copy_id = copy.id.clone();
        self.state.saved_resumes.push(copy);
        self.after_change();
        Some(copy_id)
    }

    /// Delete a saved resume. Refused (no-op) when it is the last one —
    /// the catalog never becomes empty. When the active resume is deleted,
    /// the first remaining entry takes over the working copy.
    pub fn delete_resume(&mut self, id: &str) -> bool {
        if self.state.saved_resumes.len() <= 1 {
            return false;
        }
        let Some(index) = self.state.saved_resumes.iter().position(|s| s.id == id) else {
            return false;
        };
        let removed = self.state.saved_resumes.remove(index);

        if self.state.active_resume_id.as_deref() == Some(removed.id.as_str()) {
            let successor = self.state.saved_resumes[0].clone();
            self.state.active_resume_id = Some(successor.id.clone());
            self.state.restore(successor.snapshot);
            self.history.clear();
            self.settle_saved();
        }
        self.after_change();
        true
    }

    /// Metadata-only rename of a catalog entry.
    pub fn rename_resume(&mut self, id: &str, name: &str) -> bool {
        let Some(entry) = self.state.saved_resumes.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        entry.name = name.to_string();
        entry.updated_at = Utc::now();
        self.after_change();
        true
    }

    /// Commit the working copy into the active catalog entry. Defined
    /// no-op when no resume is active.
    pub fn save_current(&mut self) -> bool {
        if self.state.active_resume_id.is_none() {
            return false;
        }
        self.sync_active();
        self.settle_saved();
        debug!("saved current resume");
        self.after_change();
        true
    }

    // ---- lifecycle --------------------------------------------------------

    /// Finish onboarding: the working copy becomes the first catalog
    /// entry. Returns the active id.
    pub fn complete_onboarding(&mut self, name: Option<&str>) -> Option<String> {
        self.state.is_first_visit = false;
        if self.state.saved_resumes.is_empty() {
            let entry = SavedResume::new(name.unwrap_or(DEFAULT_RESUME_NAME), self.state.tracked());
            let id = entry.id.clone();
            self.state.saved_resumes.push(entry);
            self.state.active_resume_id = Some(id);
            self.settle_saved();
        }
        self.after_change();
        self.state.active_resume_id.clone()
    }

    /// Replace the working copy's content with the demo resume (tracked).
    pub fn load_sample(&mut self) {
        self.tracked_change(|state| state.resume = sample_resume());
    }

    /// Reset the working copy's content to empty (tracked).
    pub fn clear_all(&mut self) {
        self.tracked_change(|state| state.resume = ResumeDocument::default());
    }

    /// Import a resume from raw JSON. Validation failures leave the store
    /// untouched — no partial import.
    pub fn import_json(&mut self, raw: &str) -> Result<(), StoreError> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| StoreError::ImportRejected(format!("not valid JSON: {e}")))?;

        let object = value
            .as_object()
            .ok_or_else(|| StoreError::ImportRejected("expected a JSON object".to_string()))?;
        for key in ["basics", "experience", "education"] {
            if !object.contains_key(key) {
                return Err(StoreError::ImportRejected(format!(
                    "missing required key: {key}"
                )));
            }
        }

        let resume: ResumeDocument = serde_json::from_value(value)
            .map_err(|e| StoreError::ImportRejected(format!("malformed resume: {e}")))?;
        self.tracked_change(|state| state.resume = resume);
        Ok(())
    }

    /// Pretty-printed JSON of the live resume content.
    pub fn export_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.state.resume)?)
    }

    /// Ephemeral preview zoom: untracked, not dirty, not persisted.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.state.zoom = zoom;
        self.notify();
    }

    // ---- timers -----------------------------------------------------------

    /// Drive the debounce timers. Fires autosave once per quiet window and
    /// polls the persistence flush. Returns whether autosave fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = self.autosave.fire(now);
        if fired && self.state.dirty {
            self.save_current();
        }
        if let Some(engine) = &mut self.persistence {
            engine.poll(now);
        }
        fired
    }

    /// Force any queued persistence write out now (shutdown path).
    pub fn flush(&mut self) -> bool {
        match &mut self.persistence {
            Some(engine) => engine.flush(),
            None => false,
        }
    }

    // ---- hydration --------------------------------------------------------

    /// Load + migrate the stored blob and install it. `hydrated` flips
    /// even when storage is empty, so the UI knows defaults are final.
    pub fn hydrate_from_storage(&mut self) -> Result<(), PersistError> {
        let Some(engine) = &self.persistence else {
            self.state.hydrated = true;
            self.notify();
            return Ok(());
        };
        match engine.load()? {
            Some(persisted) => self.hydrate(persisted),
            None => {
                self.state.hydrated = true;
                self.notify();
            }
        }
        Ok(())
    }

    /// Install an already-loaded persisted projection.
    pub fn hydrate(&mut self, persisted: PersistedState) {
        self.state.apply_persisted(persisted);
        self.state.hydrated = true;
        self.state.dirty = false;
        self.autosave.cancel();
        self.history.clear();
        self.notify();
    }

    /// The projection the persistence engine stores.
    pub fn partialize(&self) -> PersistedState {
        self.state.partialize()
    }

    // ---- internals --------------------------------------------------------

    fn tracked_change(&mut self, f: impl FnOnce(&mut StoreState)) {
        self.history.record(self.state.tracked());
        f(&mut self.state);
        self.mark_dirty();
        self.after_change();
    }

    fn mark_dirty(&mut self) {
        self.state.dirty = true;
        self.autosave.arm(Instant::now());
    }

    /// Copy the working copy into the active catalog entry, stamping its
    /// updated_at. No-op when nothing is active.
    fn sync_active(&mut self) {
        let Some(id) = self.state.active_resume_id.clone() else {
            return;
        };
        let snapshot = self.state.tracked();
        if let Some(entry) = self.state.saved_resumes.iter_mut().find(|s| s.id == id) {
            entry.snapshot = snapshot;
            entry.updated_at = Utc::now();
        }
    }

    /// Post-save housekeeping: clean dirty flag, stamp last-saved, disarm
    /// the autosave timer.
    fn settle_saved(&mut self) {
        self.state.dirty = false;
        self.state.last_saved_at = Some(Utc::now());
        self.autosave.cancel();
    }

    fn after_change(&mut self) {
        if let Some(engine) = &mut self.persistence {
            engine.queue(self.state.partialize(), Instant::now());
        }
        self.notify();
    }

    fn notify(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback(&self.state);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicsField, ContentMutation};
    use std::cell::Cell;
    use std::rc::Rc;

    fn set_name(value: &str) -> Mutation {
        Mutation::Content(ContentMutation::SetBasics {
            field: BasicsField::Name,
            value: value.to_string(),
        })
    }

    #[test]
    fn test_apply_sets_dirty_and_records_history() {
        let mut store = Store::new();
        assert!(!store.state().dirty);

        store.apply(set_name("Ada"));
        assert!(store.state().dirty);
        assert_eq!(store.state().resume.basics.name, "Ada");
        assert_eq!(store.undo_levels(), 1);
    }

    #[test]
    fn test_subscribers_observe_every_change() {
        let mut store = Store::new();
        let seen = Rc::new(Cell::new(0));
        let seen_by_callback = Rc::clone(&seen);

        let id = store.subscribe(move |_state| {
            seen_by_callback.set(seen_by_callback.get() + 1);
        });

        store.apply(set_name("A"));
        store.apply(set_name("B"));
        assert_eq!(seen.get(), 2);

        store.unsubscribe(id);
        store.apply(set_name("C"));
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_save_current_without_active_id_is_noop() {
        let mut store = Store::new();
        store.apply(set_name("Ada"));

        assert!(!store.save_current());
        assert!(store.state().dirty);
        assert_eq!(store.state().last_saved_at, None);
    }

    #[test]
    fn test_set_zoom_is_untracked() {
        let mut store = Store::new();
        store.set_zoom(1.25);
        assert_eq!(store.state().zoom, 1.25);
        assert!(!store.state().dirty);
        assert_eq!(store.undo_levels(), 0);
    }

    #[test]
    fn test_complete_onboarding_creates_first_entry() {
        let mut store = Store::new();
        store.apply(set_name("Ada"));

        let id = store.complete_onboarding(Some("First")).unwrap();
        assert!(!store.state().is_first_visit);
        assert_eq!(store.state().saved_resumes.len(), 1);
        assert_eq!(store.state().saved_resumes[0].id, id);
        assert_eq!(store.state().saved_resumes[0].name, "First");

        // Second call never duplicates the entry.
        store.complete_onboarding(None);
        assert_eq!(store.state().saved_resumes.len(), 1);
    }
}
