//! # Section Layout Model
//!
//! The resume is rendered as a fixed set of 8 sections. Visibility is a
//! total map over [`SectionKey`]; ordering is a permutation of all 8 keys
//! with `Basics` pinned at position 0. Both invariants are enforced here,
//! at the model boundary, not in the UI.

use serde::{Deserialize, Serialize};

/// The 8 fixed resume sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Basics,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Languages,
    Certifications,
}

impl SectionKey {
    /// All keys in canonical order.
    pub const ALL: [SectionKey; 8] = [
        SectionKey::Basics,
        SectionKey::Summary,
        SectionKey::Experience,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::Languages,
        SectionKey::Certifications,
    ];

    /// Human-readable section heading.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKey::Basics => "Basics",
            SectionKey::Summary => "Summary",
            SectionKey::Experience => "Experience",
            SectionKey::Education => "Education",
            SectionKey::Skills => "Skills",
            SectionKey::Projects => "Projects",
            SectionKey::Languages => "Languages",
            SectionKey::Certifications => "Certifications",
        }
    }
}

/// Per-section visibility flags. A struct of 8 bools rather than a map, so
/// the keyset is fixed by construction and dispatch is exhaustive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionVisibility {
    pub basics: bool,
    pub summary: bool,
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub projects: bool,
    pub languages: bool,
    pub certifications: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            basics: true,
            summary: true,
            experience: true,
            education: true,
            skills: true,
            projects: true,
            languages: true,
            certifications: true,
        }
    }
}

impl SectionVisibility {
    pub fn get(&self, key: SectionKey) -> bool {
        match key {
            SectionKey::Basics => self.basics,
            SectionKey::Summary => self.summary,
            SectionKey::Experience => self.experience,
            SectionKey::Education => self.education,
            SectionKey::Skills => self.skills,
            SectionKey::Projects => self.projects,
            SectionKey::Languages => self.languages,
            SectionKey::Certifications => self.certifications,
        }
    }

    pub fn set(&mut self, key: SectionKey, visible: bool) {
        match key {
            SectionKey::Basics => self.basics = visible,
            SectionKey::Summary => self.summary = visible,
            SectionKey::Experience => self.experience = visible,
            SectionKey::Education => self.education = visible,
            SectionKey::Skills => self.skills = visible,
            SectionKey::Projects => self.projects = visible,
            SectionKey::Languages => self.languages = visible,
            SectionKey::Certifications => self.certifications = visible,
        }
    }
}

/// Ordered section layout: a permutation of all 8 keys with `Basics`
/// always at position 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionOrder(Vec<SectionKey>);

impl Default for SectionOrder {
    fn default() -> Self {
        Self(SectionKey::ALL.to_vec())
    }
}

impl SectionOrder {
    pub fn keys(&self) -> &[SectionKey] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionKey> + '_ {
        self.0.iter().copied()
    }

    /// Stable single-element move: remove at `from`, insert at `to`,
    /// preserving the relative order of everything else.
    ///
    /// Silent no-op when either index is out of range, or when the move
    /// would touch position 0 — `Basics` stays pinned.
    pub fn move_section(&mut self, from: usize, to: usize) {
        if from == 0 || to == 0 {
            return;
        }
        if from >= self.0.len() || to >= self.0.len() || from == to {
            return;
        }
        let key = self.0.remove(from);
        self.0.insert(to, key);
    }

    /// Repair an order loaded from storage into a valid permutation:
    /// drop duplicates and unknown positions, append missing keys in
    /// canonical order, and force `Basics` back to the front.
    pub fn normalize(&mut self) {
        let mut seen = Vec::with_capacity(8);
        for key in &self.0 {
            if !seen.contains(key) {
                seen.push(*key);
            }
        }
        for key in SectionKey::ALL {
            if !seen.contains(&key) {
                seen.push(key);
            }
        }
        if let Some(pos) = seen.iter().position(|k| *k == SectionKey::Basics) {
            let basics = seen.remove(pos);
            seen.insert(0, basics);
        }
        self.0 = seen;
    }

    /// True when this is a permutation of all 8 keys with `Basics` first.
    pub fn is_valid(&self) -> bool {
        self.0.len() == 8
            && self.0.first() == Some(&SectionKey::Basics)
            && SectionKey::ALL.iter().all(|k| self.0.contains(k))
    }
}

impl From<Vec<SectionKey>> for SectionOrder {
    fn from(keys: Vec<SectionKey>) -> Self {
        let mut order = Self(keys);
        order.normalize();
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_is_valid() {
        let order = SectionOrder::default();
        assert!(order.is_valid());
        assert_eq!(order.keys()[0], SectionKey::Basics);
    }

    #[test]
    fn test_move_preserves_relative_order() {
        let mut order = SectionOrder::default();
        order.move_section(2, 5);
        let keys = order.keys();
        // Experience moved to index 5; everything else keeps its order.
        assert_eq!(keys[5], SectionKey::Experience);
        assert_eq!(keys[2], SectionKey::Education);
        assert_eq!(keys[3], SectionKey::Skills);
        assert!(order.is_valid());
    }

    #[test]
    fn test_basics_is_pinned() {
        let mut order = SectionOrder::default();
        let before = order.clone();

        order.move_section(0, 3);
        assert_eq!(order, before);

        order.move_section(4, 0);
        assert_eq!(order, before);
    }

    #[test]
    fn test_move_out_of_range_is_noop() {
        let mut order = SectionOrder::default();
        let before = order.clone();
        order.move_section(3, 42);
        order.move_section(42, 3);
        assert_eq!(order, before);
    }

    #[test]
    fn test_normalize_repairs_partial_order() {
        let mut order = SectionOrder(vec![
            SectionKey::Skills,
            SectionKey::Basics,
            SectionKey::Skills,
        ]);
        order.normalize();
        assert!(order.is_valid());
        assert_eq!(order.keys()[0], SectionKey::Basics);
    }

    #[test]
    fn test_visibility_roundtrip_all_keys() {
        let mut vis = SectionVisibility::default();
        for key in SectionKey::ALL {
            assert!(vis.get(key));
            vis.set(key, false);
            assert!(!vis.get(key));
        }
    }

    #[test]
    fn test_section_key_serializes_lowercase() {
        let json = serde_json::to_string(&SectionKey::Experience).unwrap();
        assert_eq!(json, r#""experience""#);
    }
}
