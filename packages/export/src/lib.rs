//! # cvforge Export
//!
//! Export seams for the resume engine. Binary encoders (PDF, DOCX) live
//! outside the core; this crate produces what they consume:
//!
//! - [`build_blocks`]: the resume flattened into styled section blocks,
//!   honoring section order, visibility, and design settings — the input
//!   to a structured (DOCX-like) writer
//! - [`fit_to_page`]: A4 page geometry for the one-page visual (PDF-like)
//!   export of a pre-rendered raster
//! - [`ResumeExporter`]: the trait boundary encoders implement, with
//!   [`JsonExporter`] as the built-in structured export

mod blocks;
mod json;
mod page;

pub use blocks::{build_blocks, BlockStyle, Paragraph, SectionBlock};
pub use json::JsonExporter;
pub use page::{fit_to_page, PageRect, A4_HEIGHT, A4_WIDTH};

use cvforge_model::ResumeSnapshot;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Export failed: {0}")]
    Encoder(String),
}

/// Boundary for artifact encoders: consume a read-only snapshot, emit a
/// binary artifact.
pub trait ResumeExporter {
    fn export(&self, snapshot: &ResumeSnapshot) -> Result<Vec<u8>, ExportError>;
}
