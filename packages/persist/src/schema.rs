//! # Persisted Schema
//!
//! The whitelisted projection of store state written to storage. Excluded
//! on purpose: dirty flag, in-memory timestamps, undo/redo stacks, and
//! ephemeral UI state (zoom, dialog flags).

use cvforge_model::{
    DesignSettings, ResumeDocument, SavedResume, SectionOrder, SectionVisibility,
    DEFAULT_TEMPLATE,
};
use serde::{Deserialize, Serialize};

use crate::migrations::SCHEMA_VERSION;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub version: u32,
    pub resume: ResumeDocument,
    pub selected_template: String,
    pub design_settings: DesignSettings,
    pub section_visibility: SectionVisibility,
    pub section_order: SectionOrder,
    pub is_first_visit: bool,
    pub saved_resumes: Vec<SavedResume>,
    pub active_resume_id: Option<String>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            resume: ResumeDocument::default(),
            selected_template: DEFAULT_TEMPLATE.to_string(),
            design_settings: DesignSettings::default(),
            section_visibility: SectionVisibility::default(),
            section_order: SectionOrder::default(),
            is_first_visit: true,
            saved_resumes: Vec::new(),
            active_resume_id: None,
        }
    }
}

impl PersistedState {
    /// Structural repair after decode: a stored order that drifted from a
    /// valid permutation is normalized rather than rejected, and a
    /// dangling active id is cleared.
    pub fn normalize(&mut self) {
        self.section_order.normalize();
        for saved in &mut self.saved_resumes {
            saved.snapshot.order.normalize();
        }
        if let Some(id) = &self.active_resume_id {
            if !self.saved_resumes.iter().any(|s| &s.id == id) {
                self.active_resume_id = self.saved_resumes.first().map(|s| s.id.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_current_version() {
        let state = PersistedState::default();
        assert_eq!(state.version, SCHEMA_VERSION);
        assert!(state.is_first_visit);
        assert!(state.saved_resumes.is_empty());
    }

    #[test]
    fn test_normalize_clears_dangling_active_id() {
        let mut state = PersistedState {
            active_resume_id: Some("gone".to_string()),
            ..PersistedState::default()
        };
        state.normalize();
        assert_eq!(state.active_resume_id, None);
    }
}
