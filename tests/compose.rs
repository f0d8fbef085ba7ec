use pdf_glean::compose::{self, RULE_WIDTH};
use pdf_glean::engine::PdfDocument;
use pdf_glean::error::ExtractError;
use pdf_glean::page_span::PageSpan;
use std::path::Path;

struct FakeDoc(Vec<&'static str>);

impl PdfDocument for FakeDoc {
    fn page_count(&self) -> usize {
        self.0.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractError> {
        Ok(self.0[index].to_string())
    }
}

#[test]
fn page_block_is_marked_and_one_indexed() {
    let rule = "=".repeat(RULE_WIDTH);
    let block = compose::page_block(1, "hello");
    assert_eq!(block, format!("\n{rule}\nPAGE 2\n{rule}\n\nhello\n"));
}

#[test]
fn rule_is_sixty_chars() {
    let block = compose::page_block(0, "x");
    let rule_line = block.lines().find(|l| l.starts_with('=')).unwrap();
    assert_eq!(rule_line.len(), 60);
    assert!(rule_line.chars().all(|c| c == '='));
}

#[test]
fn assemble_emits_one_block_per_page_in_order() {
    let doc = FakeDoc(vec!["alpha", "beta", "gamma"]);
    let span = PageSpan::resolve(3, Some((1, 10)));
    let body = compose::assemble(&doc, &span).unwrap();

    assert_eq!(body.matches("\nPAGE ").count(), 2);
    assert!(!body.contains("alpha"));
    let p2 = body.find("PAGE 2").unwrap();
    let p3 = body.find("PAGE 3").unwrap();
    assert!(p2 < p3);
    assert!(body.find("beta").unwrap() < body.find("gamma").unwrap());
}

#[test]
fn empty_span_assembles_nothing() {
    let doc = FakeDoc(vec!["only"]);
    let span = PageSpan { start: 1, end: 1 };
    assert_eq!(compose::assemble(&doc, &span).unwrap(), "");
}

#[test]
fn empty_page_text_keeps_its_marker() {
    let doc = FakeDoc(vec![""]);
    let span = PageSpan::resolve(1, None);
    let body = compose::assemble(&doc, &span).unwrap();
    assert!(body.contains("PAGE 1"));
}

#[test]
fn header_names_source_and_span() {
    let span = PageSpan { start: 1, end: 3 };
    let header = compose::metadata_header(Path::new("/tmp/report.pdf"), 3, &span);

    assert!(header.starts_with("PDF TEXT EXTRACTION METADATA"));
    assert!(header.contains("Source File: report.pdf"));
    assert!(header.contains("Extraction Date: "));
    assert!(header.contains("Total Pages in PDF: 3"));
    assert!(header.contains("Pages Extracted: 2 to 3"));
    assert!(header.ends_with(&"=".repeat(RULE_WIDTH)));
}

#[test]
fn combined_separates_header_and_body_with_one_blank_line() {
    assert_eq!(compose::combined("HEADER", "BODY"), "HEADER\n\nBODY");
}
