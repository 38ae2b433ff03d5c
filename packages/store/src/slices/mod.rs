//! # Mutation Slices
//!
//! Reducer-style operations over the tracked state, grouped by the
//! fragment they touch. Every tracked edit is a [`Mutation`] value so the
//! facade can route it through the history engine uniformly.
//!
//! ## Shared contract
//!
//! - out-of-range indices are silent no-ops, never panics
//! - the referenced substructure is replaced by value
//! - reordering is a stable single-element move
//! - skill labels and project technologies are sets keyed by their exact
//!   string value

mod content;
mod design;
mod ui;

pub use content::{BasicsField, ContentMutation};
pub use design::DesignMutation;
pub use ui::UiMutation;

use serde::{Deserialize, Serialize};

use crate::StoreState;

/// A tracked edit to the working copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    Content(ContentMutation),
    Design(DesignMutation),
    Ui(UiMutation),
}

impl Mutation {
    /// Apply to the relevant state fragment.
    pub(crate) fn apply(&self, state: &mut StoreState) {
        match self {
            Mutation::Content(m) => m.apply(&mut state.resume),
            Mutation::Design(m) => m.apply(&mut state.design),
            Mutation::Ui(m) => m.apply(
                &mut state.visibility,
                &mut state.order,
                &mut state.selected_template,
            ),
        }
    }
}
