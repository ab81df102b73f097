//! Page flow — places classified lines onto pages.
//!
//! Pagination is a small state machine. `FlowState` is `{page_index, cursor_y}`;
//! `PageFlow::place` is a pure transition from one state and one line to the next
//! state plus the instructions that line produced. `layout_lines` folds it over a
//! document and materialises the pages.
//!
//! # Ordering per non-blank line
//! 1. If `cursor − pre_gap` is below the break threshold, open a new page.
//! 2. Apply the pre-gap.
//! 3. For every wrapped line: break if the cursor is below the threshold, draw at
//!    `(margin_left, cursor)`, then move down by `size × line_pitch_factor`.
//!
//! Blank lines only move the cursor down; they never trigger a break.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::get_metrics;
use crate::layout::markup::{classify_document, ClassifiedLine};
use crate::layout::page::{DrawInstruction, LaidOutDocument, Page, PageGeometry};
use crate::layout::style::StyleSheet;
use crate::layout::wrap::wrap_text;

/// Pagination state between lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowState {
    pub page_index: usize,
    pub cursor_y: f32,
}

impl FlowState {
    /// State before the first line: first page, cursor at the top margin.
    pub fn start(geometry: &PageGeometry) -> Self {
        Self {
            page_index: 0,
            cursor_y: geometry.top_y(),
        }
    }
}

/// A draw instruction bound to the page it lands on.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub page_index: usize,
    pub instruction: DrawInstruction,
}

/// Geometry and styles for one layout run.
pub struct PageFlow<'a> {
    geometry: PageGeometry,
    styles: &'a StyleSheet,
}

impl<'a> PageFlow<'a> {
    pub fn new(geometry: PageGeometry, styles: &'a StyleSheet) -> Self {
        Self { geometry, styles }
    }

    fn new_page(&self, state: FlowState) -> FlowState {
        FlowState {
            page_index: state.page_index + 1,
            cursor_y: self.geometry.top_y(),
        }
    }

    /// Places one classified line.
    pub fn place(&self, state: FlowState, line: &ClassifiedLine) -> (FlowState, Vec<Placement>) {
        let Some(style) = self.styles.style_for(line.kind) else {
            let next = FlowState {
                cursor_y: state.cursor_y - self.styles.blank_gap_pt,
                ..state
            };
            return (next, Vec::new());
        };

        let bottom = self.geometry.bottom_y();
        let mut state = state;

        if state.cursor_y - style.pre_gap_pt < bottom {
            state = self.new_page(state);
        }
        state.cursor_y -= style.pre_gap_pt;

        let metrics = get_metrics(style.font);
        let pitch = style.line_pitch(self.styles.line_pitch_factor);
        let wrapped = wrap_text(
            &line.text,
            metrics,
            style.size_pt,
            self.geometry.content_width(),
        );

        let mut placements = Vec::with_capacity(wrapped.len());
        for text in wrapped {
            if state.cursor_y < bottom {
                state = self.new_page(state);
            }
            placements.push(Placement {
                page_index: state.page_index,
                instruction: DrawInstruction {
                    text,
                    x: self.geometry.margin_left,
                    y: state.cursor_y,
                    font: style.font,
                    size_pt: style.size_pt,
                    color: self.styles.color,
                },
            });
            state.cursor_y -= pitch;
        }

        (state, placements)
    }
}

/// Lays out an already-classified line sequence. Always yields at least one page.
pub fn layout_lines(
    lines: &[ClassifiedLine],
    geometry: PageGeometry,
    styles: &StyleSheet,
) -> LaidOutDocument {
    let flow = PageFlow::new(geometry, styles);
    let mut pages = vec![Page::default()];
    let mut state = FlowState::start(&geometry);

    for line in lines {
        let (next, placements) = flow.place(state, line);
        for placement in placements {
            while pages.len() <= placement.page_index {
                pages.push(Page::default());
            }
            pages[placement.page_index]
                .instructions
                .push(placement.instruction);
        }
        state = next;
    }

    LaidOutDocument { geometry, pages }
}

/// Classifies and lays out a whole text document.
pub fn layout_document(
    text: &str,
    geometry: PageGeometry,
    styles: &StyleSheet,
) -> LaidOutDocument {
    layout_lines(&classify_document(text), geometry, styles)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
