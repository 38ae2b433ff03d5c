//! # cvforge Store
//!
//! The composed document state engine behind the resume editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ slices: reducer-style mutations             │
//! │  - content / design / ui fragments          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ history: snapshot undo/redo (tracked state) │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ store: facade + catalog + lifecycle         │
//! │  - subscribe / notify                       │
//! │  - autosave debounce                        │
//! │  - persistence queue + hydration            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **Single synchronous state swap**: every mutation is one atomic
//!    replacement observed uniformly by all subscribers; no locks needed.
//! 2. **Tracked vs. housekeeping state**: undo/redo covers exactly the
//!    authored content ([`cvforge_model::ResumeSnapshot`]); dirty flags,
//!    timestamps, the catalog, and zoom never enter the history stacks.
//! 3. **Defensive no-ops**: out-of-range indices and refused operations
//!    (deleting the last resume, unpinning basics) never corrupt state and
//!    never panic.
//!
//! ## Usage
//!
//! ```rust
//! use cvforge_store::{ContentMutation, Mutation, Store};
//! use cvforge_model::Experience;
//!
//! let mut store = Store::new();
//! store.apply(Mutation::Content(ContentMutation::AddExperience {
//!     entry: Experience { company: "Acme".into(), ..Experience::default() },
//! }));
//! assert!(store.undo());
//! assert!(store.state().resume.experience.is_empty());
//! ```

mod autosave;
mod error;
mod history;
mod slices;
mod state;
mod store;

pub use autosave::{Debounce, AUTOSAVE_DELAY};
pub use error::StoreError;
pub use history::{History, MAX_HISTORY_LEVELS};
pub use slices::{BasicsField, ContentMutation, DesignMutation, Mutation, UiMutation};
pub use state::StoreState;
pub use store::{Store, SubscriptionId};
