//! # Store Root State
//!
//! The single mutable resource of the engine: the live working copy
//! (tracked by undo/redo), the saved-resume catalog, and housekeeping
//! flags. The working copy is *not* itself a catalog entry; the two are
//! reconciled only at defined transition points (load, create, delete,
//! explicit save).

use chrono::{DateTime, Utc};
use cvforge_model::{
    DesignSettings, ResumeDocument, ResumeSnapshot, SavedResume, SectionOrder,
    SectionVisibility, DEFAULT_TEMPLATE,
};
use cvforge_persist::{PersistedState, SCHEMA_VERSION};

#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    // Live working copy — the tracked slice.
    pub resume: ResumeDocument,
    pub selected_template: String,
    pub design: DesignSettings,
    pub visibility: SectionVisibility,
    pub order: SectionOrder,

    // Catalog.
    pub saved_resumes: Vec<SavedResume>,
    pub active_resume_id: Option<String>,

    // Housekeeping — never enters undo history.
    pub dirty: bool,
    pub last_saved_at: Option<DateTime<Utc>>,
    pub is_first_visit: bool,
    pub hydrated: bool,
    pub zoom: f32,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            resume: ResumeDocument::default(),
            selected_template: DEFAULT_TEMPLATE.to_string(),
            design: DesignSettings::default(),
            visibility: SectionVisibility::default(),
            order: SectionOrder::default(),
            saved_resumes: Vec::new(),
            active_resume_id: None,
            dirty: false,
            last_saved_at: None,
            is_first_visit: true,
            hydrated: false,
            zoom: 1.0,
        }
    }
}

impl StoreState {
    /// Project out the tracked slice: exactly what undo/redo snapshots
    /// and what a SavedResume stores.
    pub fn tracked(&self) -> ResumeSnapshot {
        ResumeSnapshot {
            resume: self.resume.clone(),
            template: self.selected_template.clone(),
            design: self.design.clone(),
            visibility: self.visibility.clone(),
            order: self.order.clone(),
        }
    }

    /// Replace the tracked slice wholesale; housekeeping fields are left
    /// alone.
    pub fn restore(&mut self, snapshot: ResumeSnapshot) {
        self.resume = snapshot.resume;
        self.selected_template = snapshot.template;
        self.design = snapshot.design;
        self.visibility = snapshot.visibility;
        self.order = snapshot.order;
    }

    /// The whitelisted projection handed to the persistence engine.
    pub fn partialize(&self) -> PersistedState {
        PersistedState {
            version: SCHEMA_VERSION,
            resume: self.resume.clone(),
            selected_template: self.selected_template.clone(),
            design_settings: self.design.clone(),
            section_visibility: self.visibility.clone(),
            section_order: self.order.clone(),
            is_first_visit: self.is_first_visit,
            saved_resumes: self.saved_resumes.clone(),
            active_resume_id: self.active_resume_id.clone(),
        }
    }

    /// Install a persisted projection as the live state.
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.resume = persisted.resume;
        self.selected_template = persisted.selected_template;
        self.design = persisted.design_settings;
        self.visibility = persisted.section_visibility;
        self.order = persisted.section_order;
        self.is_first_visit = persisted.is_first_visit;
        self.saved_resumes = persisted.saved_resumes;
        self.active_resume_id = persisted.active_resume_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_restore_roundtrip() {
        let mut state = StoreState::default();
        state.resume.basics.name = "Kim".to_string();
        state.dirty = true;
        state.zoom = 1.5;

        let snapshot = state.tracked();
        let mut other = StoreState::default();
        other.restore(snapshot);

        assert_eq!(other.resume.basics.name, "Kim");
        // Housekeeping does not travel with the snapshot.
        assert!(!other.dirty);
        assert_eq!(other.zoom, 1.0);
    }

    #[test]
    fn test_partialize_excludes_ephemera() {
        let mut state = StoreState::default();
        state.dirty = true;
        state.zoom = 0.8;
        state.last_saved_at = Some(Utc::now());

        let persisted = state.partialize();
        let mut hydrated = StoreState::default();
        hydrated.apply_persisted(persisted);

        assert!(!hydrated.dirty);
        assert_eq!(hydrated.zoom, 1.0);
        assert_eq!(hydrated.last_saved_at, None);
    }
}
