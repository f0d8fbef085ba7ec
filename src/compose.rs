use crate::engine::PdfDocument;
use crate::error::ExtractError;
use crate::page_span::PageSpan;
use crate::util;
use std::path::Path;

/// Width of the rule lines in page markers and the metadata header.
pub const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// One page body framed by its marker block. Display numbering is 1-indexed
/// even though spans are 0-indexed internally.
pub fn page_block(page_index: usize, text: &str) -> String {
    let rule = rule();
    format!("\n{rule}\nPAGE {}\n{rule}\n\n{text}\n", page_index + 1)
}

/// Marker blocks for every page in the span, in strictly ascending page
/// order. Page text is appended exactly as the decoder returned it.
pub fn assemble<D: PdfDocument>(doc: &D, span: &PageSpan) -> Result<String, ExtractError> {
    let mut body = String::new();
    for index in span.start..span.end {
        let text = doc.page_text(index)?;
        body.push_str(&page_block(index, &text));
    }
    Ok(body)
}

/// Fixed-shape header prepended to every transcript. The timestamp is
/// captured here, at composition time, so batch runs stamp each file
/// individually.
pub fn metadata_header(source: &Path, total_pages: usize, span: &PageSpan) -> String {
    let rule = rule();
    [
        "PDF TEXT EXTRACTION METADATA".to_string(),
        rule.clone(),
        format!("Source File: {}", util::file_name(source)),
        format!("Extraction Date: {}", util::now_stamp()),
        format!("Total Pages in PDF: {total_pages}"),
        format!(
            "Pages Extracted: {} to {}",
            span.first_label(),
            span.last_label()
        ),
        rule,
    ]
    .join("\n")
}

/// Header and body joined with exactly one blank line between them.
pub fn combined(header: &str, body: &str) -> String {
    format!("{header}\n\n{body}")
}
