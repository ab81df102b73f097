// Page layout engine: turns generated report text into page-bound draw instructions.
// Pure and synchronous; callers on the async runtime run it inside spawn_blocking.

pub mod flow;
pub mod font_metrics;
pub mod markup;
pub mod page;
pub mod style;
pub mod wrap;

// Re-export the public API consumed by the report pipeline and the PDF encoder.
pub use flow::layout_document;
pub use font_metrics::FontVariant;
pub use page::{DrawInstruction, LaidOutDocument, PageGeometry};
pub use style::StyleSheet;
