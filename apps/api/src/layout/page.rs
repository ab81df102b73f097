//! Page geometry and the draw instructions handed to the PDF encoder.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::FontVariant;
use crate::layout::style::Rgb;

/// Page size and margins in points. Content width is fixed for the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

impl PageGeometry {
    /// A page of the given size with 50pt margins on every side.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            margin_top: 50.0,
            margin_bottom: 50.0,
            margin_left: 50.0,
            margin_right: 50.0,
        }
    }

    /// A4 portrait.
    pub fn a4() -> Self {
        Self::with_size(595.28, 841.89)
    }

    /// US letter portrait.
    #[cfg(test)]
    pub fn us_letter() -> Self {
        Self::with_size(612.0, 792.0)
    }

    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Cursor position at the top of a fresh page.
    pub fn top_y(&self) -> f32 {
        self.height - self.margin_top
    }

    /// Break threshold: no text is placed below this y.
    pub fn bottom_y(&self) -> f32 {
        self.margin_bottom
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// One text run at an absolute position (PDF user space, origin bottom-left).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawInstruction {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: FontVariant,
    pub size_pt: f32,
    pub color: Rgb,
}

/// A closed or open page: its instructions in placement order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub instructions: Vec<DrawInstruction>,
}

/// The complete layout result for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutDocument {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

impl LaidOutDocument {
    pub fn instruction_count(&self) -> usize {
        self.pages.iter().map(|p| p.instructions.len()).sum()
    }

    #[cfg(test)]
    pub fn instructions(&self) -> impl Iterator<Item = &DrawInstruction> {
        self.pages.iter().flat_map(|p| p.instructions.iter())
    }
}
