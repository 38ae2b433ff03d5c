//! # Schema Migrations
//!
//! An explicit chain of total functions, one per version bump, run in
//! strictly ascending order over the raw JSON blob before it is decoded
//! into [`PersistedState`]. Each step only backfills what its version
//! introduced, so every step is idempotent and the chain never fails
//! destructively — a missing field is defaulted, never a reason to drop
//! the user's data.
//!
//! History:
//! - v2: linkedin / github / telegram contact fields
//! - v3: line spacing, section spacing, page margins
//! - v4: explicit section order
//! - v5: multi-resume catalog (synthesized from the single live resume)
//! - v6: photo field + show-photo flag

use chrono::Utc;
use cvforge_model::{SectionOrder, DEFAULT_TEMPLATE};
use serde_json::{json, Map, Value};
use tracing::debug;
use uuid::Uuid;

use crate::{PersistError, PersistedState};

/// Current persisted schema version.
pub const SCHEMA_VERSION: u32 = 6;

/// Run all applicable migration steps and decode the result.
///
/// A blob newer than [`SCHEMA_VERSION`] is refused rather than guessed at;
/// anything else decodes, with serde defaults as the last-resort backfill.
pub fn migrate(mut value: Value) -> Result<PersistedState, PersistError> {
    let map = value.as_object_mut().ok_or(PersistError::MalformedBlob)?;

    let found = map
        .get("version")
        .and_then(Value::as_u64)
        .unwrap_or(1) as u32;

    if found > SCHEMA_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found,
            supported: SCHEMA_VERSION,
        });
    }

    if found < SCHEMA_VERSION {
        debug!(from = found, to = SCHEMA_VERSION, "migrating persisted state");
    }

    if found < 2 {
        add_contact_links(map);
    }
    if found < 3 {
        add_spacing_settings(map);
    }
    if found < 4 {
        add_section_order(map);
    }
    if found < 5 {
        synthesize_catalog(map);
    }
    if found < 6 {
        add_photo_fields(map);
    }
    map.insert("version".to_string(), json!(SCHEMA_VERSION));

    let mut state: PersistedState = serde_json::from_value(value)?;
    state.normalize();
    Ok(state)
}

/// Get-or-create a nested JSON object. Non-object values are replaced,
/// since every schema version stored an object here.
fn object_at<'a>(map: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let entry = map
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    entry.as_object_mut().unwrap()
}

fn ensure(map: &mut Map<String, Value>, key: &str, default: Value) {
    map.entry(key.to_string()).or_insert(default);
}

/// v1 → v2: contact link fields, empty by default.
fn add_contact_links(map: &mut Map<String, Value>) {
    let basics = object_at(object_at(map, "resume"), "basics");
    ensure(basics, "linkedin", json!(""));
    ensure(basics, "github", json!(""));
    ensure(basics, "telegram", json!(""));
}

/// v2 → v3: spacing and margin design fields, "normal" by default.
fn add_spacing_settings(map: &mut Map<String, Value>) {
    let design = object_at(map, "design_settings");
    ensure(design, "line_spacing", json!("normal"));
    ensure(design, "section_spacing", json!("normal"));
    ensure(design, "page_margins", json!("normal"));
}

/// v3 → v4: explicit section order, canonical by default.
fn add_section_order(map: &mut Map<String, Value>) {
    let canonical = serde_json::to_value(SectionOrder::default())
        .unwrap_or_else(|_| json!([]));
    ensure(map, "section_order", canonical);
}

/// v4 → v5: multi-resume catalog. A pre-catalog blob holds exactly one
/// live resume; wrap it in a SavedResume entry and point the active id at
/// it so nothing the user had is lost.
fn synthesize_catalog(map: &mut Map<String, Value>) {
    let has_entries = map
        .get("saved_resumes")
        .and_then(Value::as_array)
        .map(|a| !a.is_empty())
        .unwrap_or(false);

    if !has_entries {
        let snapshot = json!({
            "resume": map.get("resume").cloned().unwrap_or_else(|| json!({})),
            "template": map
                .get("selected_template")
                .cloned()
                .unwrap_or_else(|| json!(DEFAULT_TEMPLATE)),
            "design": map.get("design_settings").cloned().unwrap_or_else(|| json!({})),
            "visibility": map
                .get("section_visibility")
                .cloned()
                .unwrap_or_else(|| json!({})),
            "order": map.get("section_order").cloned().unwrap_or_else(|| json!([])),
        });

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        map.insert(
            "saved_resumes".to_string(),
            json!([{
                "id": id,
                "name": "My resume",
                "created_at": now,
                "updated_at": now,
                "snapshot": snapshot,
            }]),
        );
        map.insert("active_resume_id".to_string(), json!(id));
        return;
    }

    // Entries exist but the active pointer may be missing; aim it at the
    // first entry instead of leaving the store detached.
    let missing_active = map
        .get("active_resume_id")
        .map(Value::is_null)
        .unwrap_or(true);
    if missing_active {
        let first_id = map["saved_resumes"][0]["id"].clone();
        map.insert("active_resume_id".to_string(), first_id);
    }
}

/// v5 → v6: photo support.
fn add_photo_fields(map: &mut Map<String, Value>) {
    let basics = object_at(object_at(map, "resume"), "basics");
    ensure(basics, "photo", json!(""));
    let design = object_at(map, "design_settings");
    ensure(design, "show_photo", json!(false));

    if let Some(entries) = map.get_mut("saved_resumes").and_then(Value::as_array_mut) {
        for entry in entries {
            if let Some(entry) = entry.as_object_mut() {
                let snapshot = object_at(entry, "snapshot");
                let basics = object_at(object_at(snapshot, "resume"), "basics");
                ensure(basics, "photo", json!(""));
                let design = object_at(snapshot, "design");
                ensure(design, "show_photo", json!(false));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvforge_model::SectionKey;

    fn v1_blob() -> Value {
        json!({
            "version": 1,
            "resume": {
                "basics": {
                    "name": "Dana",
                    "email": "dana@example.com"
                },
                "summary": "Engineer.",
                "experience": [{"company": "Acme", "role": "Dev"}],
                "education": []
            },
            "selected_template": "classic",
            "design_settings": {"accent_color": "#336699"},
            "section_visibility": {"projects": false},
            "is_first_visit": false
        })
    }

    #[test]
    fn test_v1_blob_migrates_without_data_loss() {
        let state = migrate(v1_blob()).unwrap();

        assert_eq!(state.version, SCHEMA_VERSION);
        assert_eq!(state.resume.basics.name, "Dana");
        assert_eq!(state.resume.basics.linkedin, "");
        assert_eq!(state.resume.basics.photo, "");
        assert_eq!(state.resume.experience[0].company, "Acme");
        assert_eq!(state.design_settings.accent_color, "#336699");
        assert!(!state.design_settings.show_photo);
        assert!(state.section_order.is_valid());
        assert!(!state.section_visibility.projects);
        assert!(!state.is_first_visit);

        // Catalog synthesized from the single live resume.
        assert_eq!(state.saved_resumes.len(), 1);
        let entry = &state.saved_resumes[0];
        assert_eq!(state.active_resume_id.as_deref(), Some(entry.id.as_str()));
        assert_eq!(entry.snapshot.resume.basics.name, "Dana");
    }

    #[test]
    fn test_migration_chain_is_idempotent() {
        let once = migrate(v1_blob()).unwrap();
        let twice = migrate(serde_json::to_value(&once).unwrap()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_version_treated_as_v1() {
        let mut blob = v1_blob();
        blob.as_object_mut().unwrap().remove("version");
        let state = migrate(blob).unwrap();
        assert_eq!(state.version, SCHEMA_VERSION);
        assert_eq!(state.saved_resumes.len(), 1);
    }

    #[test]
    fn test_newer_version_is_refused() {
        let blob = json!({"version": SCHEMA_VERSION + 1});
        match migrate(blob) {
            Err(PersistError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, SCHEMA_VERSION + 1);
                assert_eq!(supported, SCHEMA_VERSION);
            }
            other => panic!("expected UnsupportedVersion, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_blob_is_malformed() {
        assert!(matches!(
            migrate(json!([1, 2, 3])),
            Err(PersistError::MalformedBlob)
        ));
    }

    #[test]
    fn test_v4_blob_with_catalog_keeps_entries() {
        let state_v6 = migrate(v1_blob()).unwrap();
        let mut blob = serde_json::to_value(&state_v6).unwrap();
        blob["version"] = json!(4);
        blob.as_object_mut().unwrap().remove("active_resume_id");

        let state = migrate(blob).unwrap();
        assert_eq!(state.saved_resumes.len(), 1);
        assert_eq!(
            state.active_resume_id.as_deref(),
            Some(state.saved_resumes[0].id.as_str())
        );
    }

    #[test]
    fn test_section_order_backfilled_with_basics_first() {
        let state = migrate(v1_blob()).unwrap();
        assert_eq!(state.section_order.keys()[0], SectionKey::Basics);
    }
}
