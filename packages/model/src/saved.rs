//! # Saved Resumes
//!
//! [`ResumeSnapshot`] bundles everything a template needs to render one
//! resume, and is the exact projection tracked by undo/redo. [`SavedResume`]
//! wraps a snapshot with catalog metadata (id, name, timestamps).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DesignSettings, ResumeDocument, SectionOrder, SectionVisibility};

/// Default template id for new resumes.
pub const DEFAULT_TEMPLATE: &str = "classic";

/// Full presentation-ready bundle for one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeSnapshot {
    pub resume: ResumeDocument,
    pub template: String,
    pub design: DesignSettings,
    pub visibility: SectionVisibility,
    pub order: SectionOrder,
}

impl Default for ResumeSnapshot {
    fn default() -> Self {
        Self {
            resume: ResumeDocument::default(),
            template: DEFAULT_TEMPLATE.to_string(),
            design: DesignSettings::default(),
            visibility: SectionVisibility::default(),
            order: SectionOrder::default(),
        }
    }
}

/// One entry in the multi-resume catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedResume {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub snapshot: ResumeSnapshot,
}

impl SavedResume {
    /// Create a catalog entry around a snapshot, stamping both timestamps.
    pub fn new(name: impl Into<String>, snapshot: ResumeSnapshot) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            snapshot,
        }
    }

    /// Clone this entry under a fresh id and a "(copy)" name.
    pub fn duplicate(&self) -> Self {
        Self::new(format!("{} (copy)", self.name), self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_saved_resume_has_unique_id() {
        let a = SavedResume::new("A", ResumeSnapshot::default());
        let b = SavedResume::new("A", ResumeSnapshot::default());
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn test_duplicate_renames_and_reids() {
        let original = SavedResume::new("Design roles", ResumeSnapshot::default());
        let copy = original.duplicate();
        assert_eq!(copy.name, "Design roles (copy)");
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.snapshot, original.snapshot);
    }
}
