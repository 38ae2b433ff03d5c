//! # Section Blocks
//!
//! Flattens a [`ResumeSnapshot`] into styled paragraph blocks: one block
//! per visible, non-empty section, in the user's section order. A
//! structured-document writer (DOCX or similar) maps each block onto its
//! own paragraph run without needing to know the resume schema.

use cvforge_model::{
    DesignSettings, FontFamily, FontSize, LineSpacing, ResumeDocument, ResumeSnapshot, SectionKey,
};
use serde::Serialize;

/// Text styling derived from [`DesignSettings`], shared by all blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockStyle {
    pub font_name: &'static str,
    pub font_size_pt: f32,
    pub line_spacing: f32,
    pub accent_color: String,
}

impl BlockStyle {
    pub fn from_design(design: &DesignSettings) -> Self {
        Self {
            font_name: match design.font_family {
                FontFamily::Sans => "Helvetica",
                FontFamily::Serif => "Georgia",
                FontFamily::Mono => "Courier New",
            },
            font_size_pt: match design.font_size {
                FontSize::Small => 10.0,
                FontSize::Normal => 11.0,
                FontSize::Large => 12.5,
            },
            line_spacing: match design.line_spacing {
                LineSpacing::Compact => 1.15,
                LineSpacing::Normal => 1.4,
                LineSpacing::Relaxed => 1.65,
            },
            accent_color: design.accent_color.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub text: String,
    pub bold: bool,
    /// Rendered in the accent color (headings, names).
    pub accent: bool,
}

impl Paragraph {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            accent: false,
        }
    }

    fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            accent: false,
        }
    }
}

/// One visible section, ready for a paragraph-oriented writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBlock {
    pub key: SectionKey,
    pub title: String,
    pub style: BlockStyle,
    pub paragraphs: Vec<Paragraph>,
    /// Opaque photo data, present only on the basics block when the
    /// design enables it. Decoding is the writer's concern.
    pub photo: Option<String>,
}

/// Walk the resume in section order, skipping hidden and empty sections.
pub fn build_blocks(snapshot: &ResumeSnapshot) -> Vec<SectionBlock> {
    let style = BlockStyle::from_design(&snapshot.design);
    let mut blocks = Vec::new();

    for key in snapshot.order.iter() {
        if !snapshot.visibility.get(key) {
            continue;
        }
        let paragraphs = section_paragraphs(key, &snapshot.resume);
        if paragraphs.is_empty() {
            continue;
        }
        let photo = match key {
            SectionKey::Basics
                if snapshot.design.show_photo && !snapshot.resume.basics.photo.is_empty() =>
            {
                Some(snapshot.resume.basics.photo.clone())
            }
            _ => None,
        };
        blocks.push(SectionBlock {
            key,
            title: key.title().to_string(),
            style: style.clone(),
            paragraphs,
            photo,
        });
    }

    blocks
}

fn section_paragraphs(key: SectionKey, resume: &ResumeDocument) -> Vec<Paragraph> {
    match key {
        SectionKey::Basics => basics_paragraphs(resume),
        SectionKey::Summary => {
            if resume.summary.is_empty() {
                Vec::new()
            } else {
                vec![Paragraph::plain(resume.summary.as_str())]
            }
        }
        SectionKey::Experience => resume
            .experience
            .iter()
            .flat_map(|entry| {
                let mut paragraphs = vec![Paragraph {
                    text: join_nonempty(&[entry.role.as_str(), entry.company.as_str()], " — "),
                    bold: true,
                    accent: true,
                }];
                let end = if entry.current {
                    "Present"
                } else {
                    entry.end_date.as_str()
                };
                let dates = join_nonempty(&[entry.start_date.as_str(), end], " – ");
                let meta = join_nonempty(&[dates.as_str(), entry.location.as_str()], " · ");
                if !meta.is_empty() {
                    paragraphs.push(Paragraph::plain(meta));
                }
                if !entry.summary.is_empty() {
                    paragraphs.push(Paragraph::plain(entry.summary.as_str()));
                }
                paragraphs
            })
            .collect(),
        SectionKey::Education => resume
            .education
            .iter()
            .flat_map(|entry| {
                let degree = join_nonempty(&[entry.degree.as_str(), entry.field.as_str()], " in ");
                let mut paragraphs = vec![Paragraph::heading(join_nonempty(
                    &[degree.as_str(), entry.school.as_str()],
                    " — ",
                ))];
                let dates = join_nonempty(&[entry.start_date.as_str(), entry.end_date.as_str()], " – ");
                if !dates.is_empty() {
                    paragraphs.push(Paragraph::plain(dates));
                }
                if !entry.summary.is_empty() {
                    paragraphs.push(Paragraph::plain(entry.summary.as_str()));
                }
                paragraphs
            })
            .collect(),
        SectionKey::Skills => resume
            .skills
            .iter()
            .filter(|group| !group.skills.is_empty())
            .map(|group| Paragraph::plain(format!("{}: {}", group.name, group.skills.join(", "))))
            .collect(),
        SectionKey::Projects => resume
            .projects
            .iter()
            .flat_map(|project| {
                let mut paragraphs = vec![Paragraph::heading(project.name.as_str())];
                if !project.summary.is_empty() {
                    paragraphs.push(Paragraph::plain(project.summary.as_str()));
                }
                if !project.technologies.is_empty() {
                    paragraphs.push(Paragraph::plain(format!(
                        "Technologies: {}",
                        project.technologies.join(", ")
                    )));
                }
                if !project.url.is_empty() {
                    paragraphs.push(Paragraph::plain(project.url.as_str()));
                }
                paragraphs
            })
            .collect(),
        SectionKey::Languages => resume
            .languages
            .iter()
            .map(|language| {
                Paragraph::plain(join_nonempty(
                    &[language.name.as_str(), language.level.as_str()],
                    " — ",
                ))
            })
            .collect(),
        SectionKey::Certifications => resume
            .certifications
            .iter()
            .map(|cert| {
                let mut text = join_nonempty(&[cert.name.as_str(), cert.issuer.as_str()], " — ");
                if !cert.date.is_empty() {
                    text = format!("{text} ({})", cert.date);
                }
                Paragraph::plain(text)
            })
            .collect(),
    }
}

fn basics_paragraphs(resume: &ResumeDocument) -> Vec<Paragraph> {
    let basics = &resume.basics;
    let mut paragraphs = Vec::new();

    if !basics.name.is_empty() {
        paragraphs.push(Paragraph {
            text: basics.name.clone(),
            bold: true,
            accent: true,
        });
    }
    if !basics.headline.is_empty() {
        paragraphs.push(Paragraph::plain(basics.headline.as_str()));
    }

    let contact: Vec<&str> = [
        basics.email.as_str(),
        basics.phone.as_str(),
        basics.location.as_str(),
        basics.website.as_str(),
        basics.linkedin.as_str(),
        basics.github.as_str(),
        basics.telegram.as_str(),
    ]
    .into_iter()
    .filter(|field| !field.is_empty())
    .collect();
    if !contact.is_empty() {
        paragraphs.push(Paragraph::plain(contact.join(" · ")));
    }

    paragraphs
}

fn join_nonempty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}
