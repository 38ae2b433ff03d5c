//! # Design Slice
//!
//! Scalar setters over [`DesignSettings`].

use cvforge_model::{
    DesignSettings, FontFamily, FontSize, LineSpacing, PageMargins, SectionSpacing,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DesignMutation {
    SetAccentColor { value: String },
    SetFontFamily { value: FontFamily },
    SetFontSize { value: FontSize },
    SetLineSpacing { value: LineSpacing },
    SetSectionSpacing { value: SectionSpacing },
    SetPageMargins { value: PageMargins },
    SetShowPhoto { value: bool },
}

impl DesignMutation {
    pub(crate) fn apply(&self, design: &mut DesignSettings) {
        match self {
            DesignMutation::SetAccentColor { value } => design.accent_color = value.clone(),
            DesignMutation::SetFontFamily { value } => design.font_family = *value,
            DesignMutation::SetFontSize { value } => design.font_size = *value,
            DesignMutation::SetLineSpacing { value } => design.line_spacing = *value,
            DesignMutation::SetSectionSpacing { value } => design.section_spacing = *value,
            DesignMutation::SetPageMargins { value } => design.page_margins = *value,
            DesignMutation::SetShowPhoto { value } => design.show_photo = *value,
        }
    }
}
