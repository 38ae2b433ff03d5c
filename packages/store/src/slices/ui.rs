//! # UI Slice
//!
//! Tracked presentation state: section visibility, section order, and the
//! selected template. Section moves go through
//! [`SectionOrder::move_section`], which keeps basics pinned at position 0.

use cvforge_model::{SectionKey, SectionOrder, SectionVisibility};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMutation {
    SetSectionVisible { key: SectionKey, visible: bool },
    MoveSection { from: usize, to: usize },
    SelectTemplate { id: String },
}

impl UiMutation {
    pub(crate) fn apply(
        &self,
        visibility: &mut SectionVisibility,
        order: &mut SectionOrder,
        template: &mut String,
    ) {
        match self {
            UiMutation::SetSectionVisible { key, visible } => visibility.set(*key, *visible),
            UiMutation::MoveSection { from, to } => order.move_section(*from, *to),
            UiMutation::SelectTemplate { id } => *template = id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_visibility() {
        let mut visibility = SectionVisibility::default();
        let mut order = SectionOrder::default();
        let mut template = String::new();

        UiMutation::SetSectionVisible {
            key: SectionKey::Projects,
            visible: false,
        }
        .apply(&mut visibility, &mut order, &mut template);

        assert!(!visibility.get(SectionKey::Projects));
        assert!(visibility.get(SectionKey::Skills));
    }

    #[test]
    fn test_move_to_position_zero_is_rejected() {
        let mut visibility = SectionVisibility::default();
        let mut order = SectionOrder::default();
        let before = order.clone();
        let mut template = String::new();

        UiMutation::MoveSection { from: 3, to: 0 }.apply(&mut visibility, &mut order, &mut template);
        assert_eq!(order, before);
        assert_eq!(order.keys()[0], SectionKey::Basics);
    }
}
