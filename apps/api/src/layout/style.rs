//! Style table: how each line kind is set.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::FontVariant;
use crate::layout::markup::LineKind;

/// Font, size and pre-gap for one line kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: FontVariant,
    pub size_pt: f32,
    /// Extra vertical space before the first wrapped line.
    pub pre_gap_pt: f32,
}

impl TextStyle {
    /// Vertical distance the cursor moves after one wrapped line.
    pub fn line_pitch(&self, pitch_factor: f32) -> f32 {
        self.size_pt * pitch_factor
    }
}

/// RGB colour with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Mapping from line kind to style, plus the spacing constants of the flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    pub heading1: TextStyle,
    pub heading2: TextStyle,
    pub body: TextStyle,
    /// Cursor decrement for a blank line.
    pub blank_gap_pt: f32,
    /// Line pitch as a multiple of the font size.
    pub line_pitch_factor: f32,
    pub color: Rgb,
}

impl StyleSheet {
    /// Style for a drawable line kind. `Blank` lines have no style.
    pub fn style_for(&self, kind: LineKind) -> Option<&TextStyle> {
        match kind {
            LineKind::Heading1 => Some(&self.heading1),
            LineKind::Heading2 => Some(&self.heading2),
            LineKind::Body => Some(&self.body),
            LineKind::Blank => None,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            heading1: TextStyle {
                font: FontVariant::Bold,
                size_pt: 18.0,
                pre_gap_pt: 20.0,
            },
            heading2: TextStyle {
                font: FontVariant::Bold,
                size_pt: 14.0,
                pre_gap_pt: 15.0,
            },
            body: TextStyle {
                font: FontVariant::Regular,
                size_pt: 10.0,
                pre_gap_pt: 0.0,
            },
            blank_gap_pt: 10.0,
            line_pitch_factor: 1.5,
            color: Rgb {
                r: 0.1,
                g: 0.1,
                b: 0.1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        let sheet = StyleSheet::default();
        let h1 = sheet.style_for(LineKind::Heading1).copied();
        assert_eq!(
            h1,
            Some(TextStyle {
                font: FontVariant::Bold,
                size_pt: 18.0,
                pre_gap_pt: 20.0
            })
        );
        assert_eq!(sheet.style_for(LineKind::Heading2).map(|s| s.size_pt), Some(14.0));
        assert_eq!(sheet.style_for(LineKind::Body).map(|s| s.font), Some(FontVariant::Regular));
        assert!(sheet.style_for(LineKind::Blank).is_none());
    }

    #[test]
    fn test_line_pitch_follows_font_size() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.body.line_pitch(sheet.line_pitch_factor), 15.0);
        assert_eq!(sheet.heading1.line_pitch(sheet.line_pitch_factor), 27.0);
    }
}
