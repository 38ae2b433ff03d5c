//! # JSON Export
//!
//! Serializes the live resume content verbatim, pretty-printed, for
//! download. The full snapshot styling is not included — JSON export is a
//! content interchange format, not a presentation one.

use cvforge_model::ResumeSnapshot;

use crate::{ExportError, ResumeExporter};

#[derive(Debug, Default)]
pub struct JsonExporter;

impl ResumeExporter for JsonExporter {
    fn export(&self, snapshot: &ResumeSnapshot) -> Result<Vec<u8>, ExportError> {
        Ok(serde_json::to_vec_pretty(&snapshot.resume)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvforge_model::{sample_resume, ResumeDocument};

    #[test]
    fn test_export_roundtrips_resume_content() {
        let snapshot = ResumeSnapshot {
            resume: sample_resume(),
            ..ResumeSnapshot::default()
        };

        let bytes = JsonExporter.export(&snapshot).unwrap();
        let decoded: ResumeDocument = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, snapshot.resume);
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let bytes = JsonExporter.export(&ResumeSnapshot::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("\"basics\""));
    }
}
