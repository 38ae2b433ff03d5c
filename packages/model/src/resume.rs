//! # Resume Content
//!
//! The user-editable document: identity fields, a free-text summary, and
//! five ordered collections. Collections preserve insertion order;
//! reordering is always an explicit operation.

use serde::{Deserialize, Serialize};

/// Identity and contact fields. The `photo` field holds an opaque data-URL
/// string; decoding it is an exporter concern.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Basics {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub telegram: String,
    pub photo: String,
}

/// One work-experience entry. `current` marks an ongoing position; the UI
/// blanks `end_date` when it is set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub summary: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub summary: String,
}

/// A named skill category. `skills` is semantically a set keyed by the
/// exact string value; dedup happens at the mutation boundary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

/// A project entry. `technologies` carries free-form tags with the same
/// set semantics as skills.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub summary: String,
    pub url: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: String,
}

/// The complete user-authored resume content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub basics: Basics,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub languages: Vec<Language>,
    pub certifications: Vec<Certification>,
}

/// Populated demo content installed on first visit / `cvforge init`.
pub fn sample_resume() -> ResumeDocument {
    ResumeDocument {
        basics: Basics {
            name: "Alex Rivera".to_string(),
            headline: "Senior Backend Engineer".to_string(),
            email: "alex.rivera@example.com".to_string(),
            phone: "+1 555 010 2030".to_string(),
            location: "Lisbon, Portugal".to_string(),
            website: "https://alexrivera.dev".to_string(),
            linkedin: "linkedin.com/in/alexrivera".to_string(),
            github: "github.com/alexrivera".to_string(),
            ..Basics::default()
        },
        summary: "Backend engineer with eight years of experience building \
                  and operating distributed systems. Focus on reliability, \
                  observability, and pragmatic service design."
            .to_string(),
        experience: vec![
            Experience {
                company: "Northwind Cloud".to_string(),
                role: "Senior Backend Engineer".to_string(),
                location: "Remote".to_string(),
                start_date: "2021-03".to_string(),
                end_date: String::new(),
                summary: "Own the ingestion pipeline handling 2M events/min. \
                          Led the migration from batch to streaming."
                    .to_string(),
                current: true,
            },
            Experience {
                company: "Fabrikam Labs".to_string(),
                role: "Backend Engineer".to_string(),
                location: "Lisbon".to_string(),
                start_date: "2017-06".to_string(),
                end_date: "2021-02".to_string(),
                summary: "Built the billing service and its reconciliation \
                          tooling."
                    .to_string(),
                current: false,
            },
        ],
        education: vec![Education {
            school: "University of Lisbon".to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2013".to_string(),
            end_date: "2017".to_string(),
            summary: String::new(),
        }],
        skills: vec![
            SkillGroup {
                name: "Languages".to_string(),
                skills: vec!["Rust".to_string(), "Go".to_string(), "SQL".to_string()],
            },
            SkillGroup {
                name: "Infrastructure".to_string(),
                skills: vec![
                    "Kubernetes".to_string(),
                    "Kafka".to_string(),
                    "PostgreSQL".to_string(),
                ],
            },
        ],
        projects: vec![Project {
            name: "tracequery".to_string(),
            summary: "CLI for querying distributed traces offline.".to_string(),
            url: "https://github.com/alexrivera/tracequery".to_string(),
            technologies: vec!["Rust".to_string(), "OpenTelemetry".to_string()],
        }],
        languages: vec![
            Language {
                name: "English".to_string(),
                level: "Fluent".to_string(),
            },
            Language {
                name: "Portuguese".to_string(),
                level: "Native".to_string(),
            },
        ],
        certifications: vec![Certification {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            date: "2022".to_string(),
            url: String::new(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_has_empty_strings() {
        let doc = ResumeDocument::default();
        assert_eq!(doc.basics.name, "");
        assert_eq!(doc.basics.linkedin, "");
        assert_eq!(doc.summary, "");
        assert!(doc.experience.is_empty());
        assert!(doc.certifications.is_empty());
    }

    #[test]
    fn test_partial_json_backfills_defaults() {
        // Old blobs may be missing fields entirely; serde(default) must
        // backfill them instead of failing.
        let doc: ResumeDocument =
            serde_json::from_str(r#"{"basics": {"name": "Sam"}, "summary": "hi"}"#).unwrap();
        assert_eq!(doc.basics.name, "Sam");
        assert_eq!(doc.basics.photo, "");
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_sample_resume_is_nonempty() {
        let doc = sample_resume();
        assert!(!doc.basics.name.is_empty());
        assert!(!doc.experience.is_empty());
        assert!(doc.experience[0].current);
    }
}
