//! # Design Settings
//!
//! Presentation knobs consumed by templates and exporters. Every field has
//! a default so partial blobs from old schema versions can be backfilled.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Sans,
    Serif,
    Mono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Normal,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSpacing {
    Compact,
    #[default]
    Normal,
    Relaxed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionSpacing {
    Compact,
    #[default]
    Normal,
    Relaxed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageMargins {
    Narrow,
    #[default]
    Normal,
    Wide,
}

pub const DEFAULT_ACCENT_COLOR: &str = "#2563eb";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    pub accent_color: String,
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub line_spacing: LineSpacing,
    pub section_spacing: SectionSpacing,
    pub page_margins: PageMargins,
    pub show_photo: bool,
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            font_family: FontFamily::default(),
            font_size: FontSize::default(),
            line_spacing: LineSpacing::default(),
            section_spacing: SectionSpacing::default(),
            page_margins: PageMargins::default(),
            show_photo: false,
        }
    }
}
