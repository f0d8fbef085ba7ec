use pdf_glean::output::{self, OutputFormat};
use std::fs;

#[test]
fn txt_writes_verbatim_beside_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("doc.pdf");
    fs::write(&source, b"%PDF-1.4").unwrap();

    let written = output::write_outputs(&source, "COMBINED", 4, OutputFormat::Txt).unwrap();
    assert_eq!(written, vec![dir.path().join("doc.txt")]);
    assert_eq!(fs::read_to_string(&written[0]).unwrap(), "COMBINED");
}

#[test]
fn md_wraps_combined_text_in_a_frame() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("doc.pdf");
    fs::write(&source, b"%PDF-1.4").unwrap();

    let written = output::write_outputs(&source, "COMBINED", 4, OutputFormat::Md).unwrap();
    assert_eq!(written, vec![dir.path().join("doc.md")]);

    let md = fs::read_to_string(&written[0]).unwrap();
    assert!(md.starts_with("# doc\n\n**Total Pages:** 4  \n**Extracted:** "));
    assert!(md.ends_with("\n\n---\n\nCOMBINED"));
}

#[test]
fn both_writes_txt_and_md_with_matching_bodies() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("doc.pdf");
    fs::write(&source, b"%PDF-1.4").unwrap();

    let written = output::write_outputs(&source, "COMBINED", 2, OutputFormat::Both).unwrap();
    assert_eq!(written.len(), 2);

    let txt = fs::read_to_string(dir.path().join("doc.txt")).unwrap();
    let md = fs::read_to_string(dir.path().join("doc.md")).unwrap();
    // The markdown output is the txt output plus the wrapper framing.
    assert!(md.ends_with(&format!("---\n\n{txt}")));
}

#[test]
fn existing_outputs_are_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("doc.pdf");
    fs::write(&source, b"%PDF-1.4").unwrap();
    let dest = dir.path().join("doc.txt");
    fs::write(&dest, "stale").unwrap();

    output::write_outputs(&source, "fresh", 1, OutputFormat::Txt).unwrap();
    assert_eq!(fs::read_to_string(&dest).unwrap(), "fresh");
}

#[test]
fn format_knows_which_renderings_it_wants() {
    assert!(OutputFormat::Txt.wants_txt() && !OutputFormat::Txt.wants_md());
    assert!(!OutputFormat::Md.wants_txt() && OutputFormat::Md.wants_md());
    assert!(OutputFormat::Both.wants_txt() && OutputFormat::Both.wants_md());
}
