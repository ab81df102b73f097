//! Visible-text extraction from raw HTML using lol_html.
//!
//! Two streaming passes: the first drops page chrome (`script`, `style`, `nav`,
//! `footer`, `header`, `aside`, `form`), the second collects headings, paragraphs,
//! the title and the meta description from what is left. Every matched element
//! yields one block holding all of its text, nested elements included.

use std::cell::RefCell;
use std::rc::Rc;

use lol_html::html_content::Element;
use lol_html::{doc_text, element, end_tag, rewrite_str, RewriteStrSettings};
use thiserror::Error;

const NOISE_SELECTORS: &[&str] = &["script", "style", "nav", "footer", "header", "aside", "form"];
const TEXT_SELECTORS: &[&str] = &["h1", "h2", "h3", "p", "title"];
const META_DESCRIPTION_SELECTOR: &str = r#"meta[name="description"]"#;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTML rewrite failed: {0}")]
    Rewrite(String),
}

/// Extracts the readable copy of a page, whitespace-collapsed and cut to `max_chars`.
pub fn extract_text(html: &str, max_chars: usize) -> Result<String, ExtractError> {
    let cleaned = strip_noise(html)?;
    let blocks = collect_blocks(&cleaned)?;

    let joined = blocks
        .iter()
        .map(|b| html_escape::decode_html_entities(b.trim()).into_owned())
        .filter(|b| !b.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let collapsed = collapse_whitespace(&joined);
    Ok(collapsed.chars().take(max_chars).collect())
}

fn strip_noise(html: &str) -> Result<String, ExtractError> {
    let handlers = NOISE_SELECTORS
        .iter()
        .map(|selector| {
            element!(*selector, |el| {
                el.remove();
                Ok(())
            })
        })
        .collect();

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|e| ExtractError::Rewrite(e.to_string()))
}

struct OpenBlock {
    index: usize,
    paragraph: bool,
}

/// Blocks in start-tag order plus the matched elements still open.
#[derive(Default)]
struct BlockCollector {
    blocks: Vec<String>,
    open: Vec<OpenBlock>,
}

impl BlockCollector {
    fn open_block(&mut self, tag: &str) -> usize {
        // A new paragraph or heading implicitly closes an open <p>, and lol_html
        // fires no end-tag handler for implicitly closed elements.
        if tag != "title" {
            self.open.retain(|b| !b.paragraph);
        }
        let index = self.blocks.len();
        self.blocks.push(String::new());
        self.open.push(OpenBlock {
            index,
            paragraph: tag == "p",
        });
        index
    }

    /// Closes the block and anything still open inside it.
    fn close_block(&mut self, index: usize) {
        if let Some(pos) = self.open.iter().position(|b| b.index == index) {
            self.open.truncate(pos);
        }
    }

    fn push_text(&mut self, chunk: &str) {
        for open in &self.open {
            self.blocks[open.index].push_str(chunk);
        }
    }
}

/// One string per matched element, in document order.
fn collect_blocks(html: &str) -> Result<Vec<String>, ExtractError> {
    let collector = Rc::new(RefCell::new(BlockCollector::default()));

    let mut handlers = Vec::new();
    for selector in TEXT_SELECTORS {
        let collector = Rc::clone(&collector);
        handlers.push(element!(*selector, move |el: &mut Element| {
            let index = collector.borrow_mut().open_block(&el.tag_name());
            let on_close = Rc::clone(&collector);
            el.on_end_tag(end_tag!(move |_end| {
                on_close.borrow_mut().close_block(index);
                Ok(())
            }))
        }));
    }

    let meta = Rc::clone(&collector);
    handlers.push(element!(META_DESCRIPTION_SELECTOR, move |el| {
        if let Some(content) = el.get_attribute("content") {
            meta.borrow_mut().blocks.push(content);
        }
        Ok(())
    }));

    let text_sink = Rc::clone(&collector);
    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            document_content_handlers: vec![doc_text!(move |chunk| {
                text_sink.borrow_mut().push_text(chunk.as_str());
                Ok(())
            })],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|e| ExtractError::Rewrite(e.to_string()))?;

    let blocks = std::mem::take(&mut collector.borrow_mut().blocks);
    Ok(blocks)
}

/// Collapses every whitespace run to a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
