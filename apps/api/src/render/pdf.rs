//! PDF encoding with lopdf.
//!
//! One PDF page per laid-out page. Both font variants are base-14 Type1 fonts
//! with `WinAnsiEncoding`, registered once and shared by every page.

use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};
use thiserror::Error;

use crate::layout::font_metrics::encode_win_ansi;
use crate::layout::{DrawInstruction, FontVariant, LaidOutDocument};

const PRODUCER: &str = "growth-report-api";

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF encoding failed: {0}")]
    Lopdf(#[from] lopdf::Error),

    #[error("PDF write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Document information dictionary entries.
#[derive(Debug, Clone, Default)]
pub struct PdfMetadata {
    pub title: String,
    pub author: String,
}

fn text_string(s: &str) -> Object {
    Object::String(encode_win_ansi(s), StringFormat::Literal)
}

fn add_font(doc: &mut Document, variant: FontVariant) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => variant.base_font(),
        "Encoding" => "WinAnsiEncoding",
    })
}

fn text_operations(instruction: &DrawInstruction) -> Vec<Operation> {
    let color = instruction.color;
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                instruction.font.resource_name().into(),
                instruction.size_pt.into(),
            ],
        ),
        Operation::new("rg", vec![color.r.into(), color.g.into(), color.b.into()]),
        Operation::new("Td", vec![instruction.x.into(), instruction.y.into()]),
        Operation::new("Tj", vec![text_string(&instruction.text)]),
        Operation::new("ET", vec![]),
    ]
}

/// Encodes the laid-out pages into a complete PDF file.
pub fn encode_pdf(layout: &LaidOutDocument, metadata: &PdfMetadata) -> Result<Vec<u8>, PdfError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let regular_id = add_font(&mut doc, FontVariant::Regular);
    let bold_id = add_font(&mut doc, FontVariant::Bold);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FontVariant::Regular.resource_name() => regular_id,
            FontVariant::Bold.resource_name() => bold_id,
        },
    });

    let geometry = layout.geometry;
    let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());

    for page in &layout.pages {
        let content = Content {
            operations: page
                .instructions
                .iter()
                .flat_map(text_operations)
                .collect::<Vec<_>>(),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), geometry.width.into(), geometry.height.into()],
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let creation_date = Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
    let info_id = doc.add_object(dictionary! {
        "Title" => text_string(&metadata.title),
        "Author" => text_string(&metadata.author),
        "Producer" => text_string(PRODUCER),
        "CreationDate" => Object::string_literal(creation_date),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    doc.compress();

    let mut output = Vec::new();
    doc.save_to(&mut output)?;
    Ok(output)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
