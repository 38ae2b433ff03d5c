//! # cvforge Model
//!
//! Domain model for the resume state engine.
//!
//! Pure data shapes plus their structural invariants:
//!
//! - [`ResumeDocument`]: the user-authored content (identity, summary, and
//!   the ordered collections)
//! - [`DesignSettings`]: presentation knobs consumed by templates/exporters
//! - [`SectionKey`] / [`SectionVisibility`] / [`SectionOrder`]: the fixed
//!   8-section layout model, with "basics" pinned at position 0
//! - [`ResumeSnapshot`]: the bundle of everything a template needs, and the
//!   exact projection tracked by undo/redo
//! - [`SavedResume`]: a named, timestamped snapshot in the multi-resume
//!   catalog
//!
//! Every string field defaults to the empty string, never to an absent
//! value, so form bindings stay total functions.

pub mod design;
pub mod resume;
pub mod saved;
pub mod sections;

pub use design::*;
pub use resume::*;
pub use saved::*;
pub use sections::*;
