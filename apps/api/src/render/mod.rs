// PDF encoder: turns a laid-out document into PDF bytes.

pub mod pdf;

pub use pdf::{encode_pdf, PdfMetadata};
