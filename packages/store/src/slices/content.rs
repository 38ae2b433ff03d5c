//! # Content Slice
//!
//! Edits to the user-authored [`ResumeDocument`]: identity fields, the
//! summary, and the five ordered collections. Update variants replace the
//! whole record at an index; collection moves are stable single-element
//! relocations.

use cvforge_model::{
    Certification, Education, Experience, Language, Project, ResumeDocument, SkillGroup,
};
use serde::{Deserialize, Serialize};

/// Identity fields addressable by a single setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicsField {
    Name,
    Headline,
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
    Github,
    Telegram,
    Photo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentMutation {
    SetBasics { field: BasicsField, value: String },
    SetSummary { text: String },

    AddExperience { entry: Experience },
    UpdateExperience { index: usize, entry: Experience },
    RemoveExperience { index: usize },
    MoveExperience { from: usize, to: usize },

    AddEducation { entry: Education },
    UpdateEducation { index: usize, entry: Education },
    RemoveEducation { index: usize },
    MoveEducation { from: usize, to: usize },

    AddSkillGroup { name: String },
    RenameSkillGroup { index: usize, name: String },
    RemoveSkillGroup { index: usize },
    MoveSkillGroup { from: usize, to: usize },
    AddSkill { group: usize, label: String },
    RemoveSkill { group: usize, label: String },

    AddProject { entry: Project },
    UpdateProject { index: usize, entry: Project },
    RemoveProject { index: usize },
    MoveProject { from: usize, to: usize },
    AddTechnology { project: usize, tag: String },
    RemoveTechnology { project: usize, tag: String },

    AddLanguage { entry: Language },
    UpdateLanguage { index: usize, entry: Language },
    RemoveLanguage { index: usize },
    MoveLanguage { from: usize, to: usize },

    AddCertification { entry: Certification },
    UpdateCertification { index: usize, entry: Certification },
    RemoveCertification { index: usize },
    MoveCertification { from: usize, to: usize },
}

impl ContentMutation {
    pub(crate) fn apply(&self, doc: &mut ResumeDocument) {
        match self {
            ContentMutation::SetBasics { field, value } => {
                let slot = match field {
                    BasicsField::Name => &mut doc.basics.name,
                    BasicsField::Headline => &mut doc.basics.headline,
                    BasicsField::Email => &mut doc.basics.email,
                    BasicsField::Phone => &mut doc.basics.phone,
                    BasicsField::Location => &mut doc.basics.location,
                    BasicsField::Website => &mut doc.basics.website,
                    BasicsField::Linkedin => &mut doc.basics.linkedin,
                    BasicsField::Github => &mut doc.basics.github,
                    BasicsField::Telegram => &mut doc.basics.telegram,
                    BasicsField::Photo => &mut doc.basics.photo,
                };
                *slot = value.clone();
            }
            ContentMutation::SetSummary { text } => doc.summary = text.clone(),

            ContentMutation::AddExperience { entry } => doc.experience.push(entry.clone()),
            ContentMutation::UpdateExperience { index, entry } => {
                replace_at(&mut doc.experience, *index, entry.clone())
            }
            ContentMutation::RemoveExperience { index } => remove_at(&mut doc.experience, *index),
            ContentMutation::MoveExperience { from, to } => {
                move_item(&mut doc.experience, *from, *to)
            }

            ContentMutation::AddEducation { entry } => doc.education.push(entry.clone()),
            ContentMutation::UpdateEducation { index, entry } => {
                replace_at(&mut doc.education, *index, entry.clone())
            }
            ContentMutation::RemoveEducation { index } => remove_at(&mut doc.education, *index),
            ContentMutation::MoveEducation { from, to } => move_item(&mut doc.education, *from, *to),

            ContentMutation::AddSkillGroup { name } => doc.skills.push(SkillGroup {
                name: name.clone(),
                skills: Vec::new(),
            }),
            ContentMutation::RenameSkillGroup { index, name } => {
                if let Some(group) = doc.skills.get_mut(*index) {
                    group.name = name.clone();
                }
            }
            ContentMutation::RemoveSkillGroup { index } => remove_at(&mut doc.skills, *index),
            ContentMutation::MoveSkillGroup { from, to } => move_item(&mut doc.skills, *from, *to),
            ContentMutation::AddSkill { group, label } => {
                if let Some(group) = doc.skills.get_mut(*group) {
                    add_unique(&mut group.skills, label);
                }
            }
            ContentMutation::RemoveSkill { group, label } => {
                if let Some(group) = doc.skills.get_mut(*group) {
                    remove_value(&mut group.skills, label);
                }
            }

            ContentMutation::AddProject { entry } => doc.projects.push(entry.clone()),
            ContentMutation::UpdateProject { index, entry } => {
                replace_at(&mut doc.projects, *index, entry.clone())
            }
            ContentMutation::RemoveProject { index } => remove_at(&mut doc.projects, *index),
            ContentMutation::MoveProject { from, to } => move_item(&mut doc.projects, *from, *to),
            ContentMutation::AddTechnology { project, tag } => {
                if let Some(project) = doc.projects.get_mut(*project) {
                    add_unique(&mut project.technologies, tag);
                }
            }
            ContentMutation::RemoveTechnology { project, tag } => {
                if let Some(project) = doc.projects.get_mut(*project) {
                    remove_value(&mut project.technologies, tag);
                }
            }

            ContentMutation::AddLanguage { entry } => doc.languages.push(entry.clone()),
            ContentMutation::UpdateLanguage { index, entry } => {
                replace_at(&mut doc.languages, *index, entry.clone())
            }
            ContentMutation::RemoveLanguage { index } => remove_at(&mut doc.languages, *index),
            ContentMutation::MoveLanguage { from, to } => move_item(&mut doc.languages, *from, *to),

            ContentMutation::AddCertification { entry } => doc.certifications.push(entry.clone()),
            ContentMutation::UpdateCertification { index, entry } => {
                replace_at(&mut doc.certifications, *index, entry.clone())
            }
            ContentMutation::RemoveCertification { index } => {
                remove_at(&mut doc.certifications, *index)
            }
            ContentMutation::MoveCertification { from, to } => {
                move_item(&mut doc.certifications, *from, *to)
            }
        }
    }
}

fn replace_at<T>(items: &mut [T], index: usize, value: T) {
    if let Some(slot) = items.get_mut(index) {
        *slot = value;
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

/// Stable single-element move: remove at `from`, insert at `to`.
fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Set-style add: duplicates by exact string match are no-ops.
fn add_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// Set-style remove: drops every matching entry.
fn remove_value(values: &mut Vec<String>, value: &str) {
    values.retain(|v| v != value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_experience(companies: &[&str]) -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        for company in companies {
            doc.experience.push(Experience {
                company: company.to_string(),
                ..Experience::default()
            });
        }
        doc
    }

    #[test]
    fn test_set_basics_field() {
        let mut doc = ResumeDocument::default();
        ContentMutation::SetBasics {
            field: BasicsField::Name,
            value: "Robin".to_string(),
        }
        .apply(&mut doc);
        assert_eq!(doc.basics.name, "Robin");
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let mut doc = doc_with_experience(&["Acme"]);
        ContentMutation::UpdateExperience {
            index: 4,
            entry: Experience::default(),
        }
        .apply(&mut doc);
        ContentMutation::RemoveExperience { index: 4 }.apply(&mut doc);
        assert_eq!(doc.experience.len(), 1);
        assert_eq!(doc.experience[0].company, "Acme");
    }

    #[test]
    fn test_move_preserves_relative_order() {
        let mut doc = doc_with_experience(&["a", "b", "c", "d", "e"]);
        ContentMutation::MoveExperience { from: 1, to: 3 }.apply(&mut doc);
        let order: Vec<&str> = doc
            .experience
            .iter()
            .map(|e| e.company.as_str())
            .collect();
        assert_eq!(order, ["a", "c", "d", "b", "e"]);
    }

    #[test]
    fn test_move_all_valid_positions_keep_length_and_order() {
        // Reorder stability across the full (from, to) grid.
        for from in 0..5 {
            for to in 0..5 {
                let mut doc = doc_with_experience(&["a", "b", "c", "d", "e"]);
                ContentMutation::MoveExperience { from, to }.apply(&mut doc);
                assert_eq!(doc.experience.len(), 5);

                let mut rest: Vec<&str> = doc
                    .experience
                    .iter()
                    .map(|e| e.company.as_str())
                    .collect();
                let moved = ["a", "b", "c", "d", "e"][from];
                rest.retain(|c| *c != moved);
                let mut expected = vec!["a", "b", "c", "d", "e"];
                expected.retain(|c| *c != moved);
                assert_eq!(rest, expected, "from={from} to={to}");
            }
        }
    }

    #[test]
    fn test_skill_set_semantics() {
        let mut doc = ResumeDocument::default();
        ContentMutation::AddSkillGroup {
            name: "Languages".to_string(),
        }
        .apply(&mut doc);

        for label in ["Rust", "Go", "Rust"] {
            ContentMutation::AddSkill {
                group: 0,
                label: label.to_string(),
            }
            .apply(&mut doc);
        }
        assert_eq!(doc.skills[0].skills, ["Rust", "Go"]);

        // Exact-match only: case differs, so this is a distinct label.
        ContentMutation::AddSkill {
            group: 0,
            label: "rust".to_string(),
        }
        .apply(&mut doc);
        assert_eq!(doc.skills[0].skills.len(), 3);

        ContentMutation::RemoveSkill {
            group: 0,
            label: "Rust".to_string(),
        }
        .apply(&mut doc);
        assert_eq!(doc.skills[0].skills, ["Go", "rust"]);
    }

    #[test]
    fn test_technology_tags_dedup() {
        let mut doc = ResumeDocument::default();
        ContentMutation::AddProject {
            entry: Project::default(),
        }
        .apply(&mut doc);

        ContentMutation::AddTechnology {
            project: 0,
            tag: "Kafka".to_string(),
        }
        .apply(&mut doc);
        ContentMutation::AddTechnology {
            project: 0,
            tag: "Kafka".to_string(),
        }
        .apply(&mut doc);
        assert_eq!(doc.projects[0].technologies, ["Kafka"]);

        // Missing project index: no-op.
        ContentMutation::AddTechnology {
            project: 9,
            tag: "Redis".to_string(),
        }
        .apply(&mut doc);
        assert_eq!(doc.projects.len(), 1);
    }
}
