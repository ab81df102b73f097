//! Line classification for the heading markup the report generator emits.
//!
//! Only two constructs are recognised: `# ` (level-1 heading) and `## ` (level-2
//! heading). Everything else, including list markers, emphasis and links, is body
//! text and keeps its raw markup characters.

use serde::{Deserialize, Serialize};

const HEADING1_PREFIX: &str = "# ";
const HEADING2_PREFIX: &str = "## ";

/// The closed set of line kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Heading1,
    Heading2,
    Blank,
    Body,
}

/// One input line after classification. `text` has the heading marker stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    pub text: String,
}

/// Classifies a single line.
///
/// Whitespace-only lines are `Blank` first; then `# ` wins over `## `.
pub fn classify_line(line: &str) -> ClassifiedLine {
    if line.trim().is_empty() {
        return ClassifiedLine {
            kind: LineKind::Blank,
            text: String::new(),
        };
    }

    if let Some(rest) = line.strip_prefix(HEADING1_PREFIX) {
        ClassifiedLine {
            kind: LineKind::Heading1,
            text: rest.to_string(),
        }
    } else if let Some(rest) = line.strip_prefix(HEADING2_PREFIX) {
        ClassifiedLine {
            kind: LineKind::Heading2,
            text: rest.to_string(),
        }
    } else {
        ClassifiedLine {
            kind: LineKind::Body,
            text: line.to_string(),
        }
    }
}

/// Splits a document into lines and classifies each one, preserving order.
pub fn classify_document(text: &str) -> Vec<ClassifiedLine> {
    text.lines().map(classify_line).collect()
}
