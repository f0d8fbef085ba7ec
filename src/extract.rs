use crate::{
    compose,
    config::Config,
    discover,
    engine::{PdfDocument, PdfEngine},
    error::ExtractError,
    output::{self, OutputFormat},
    page_span::PageSpan,
    report::{BatchTally, FileReport},
    util,
};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

/// Sequential extraction orchestrator. One engine, one thread of control;
/// the only state it carries is configuration.
pub struct Extractor<E: PdfEngine> {
    cfg: Config,
    engine: E,
}

impl<E: PdfEngine> Extractor<E> {
    pub fn new(cfg: &Config, engine: E) -> Self {
        Self {
            cfg: cfg.clone(),
            engine,
        }
    }

    /// Run the whole single-file pipeline: open the document, resolve the
    /// page window, assemble marker blocks, prepend the metadata header,
    /// write the requested renderings. Failure is a returned value for the
    /// caller to inspect; the document handle is dropped either way.
    pub fn extract_file(
        &self,
        source: &Path,
        format: OutputFormat,
        requested: Option<(i64, i64)>,
    ) -> Result<FileReport, ExtractError> {
        let doc = self.engine.open(source)?;
        let total_pages = doc.page_count();
        let span = PageSpan::resolve(total_pages, requested);

        debug!(
            "resolved span {}..{} of {} pages for {}",
            span.start,
            span.end,
            total_pages,
            source.display()
        );

        let body = compose::assemble(&doc, &span)?;
        let header = compose::metadata_header(source, total_pages, &span);
        let combined = compose::combined(&header, &body);
        let outputs = output::write_outputs(source, &combined, total_pages, format)?;

        info!(
            "extracted {} pages {} to {} outputs={}",
            source.display(),
            span.first_label(),
            span.last_label(),
            outputs.len()
        );

        Ok(FileReport {
            source: source.to_path_buf(),
            total_pages,
            span,
            outputs,
        })
    }

    /// Process every matching file under `dir` once, sequentially, in
    /// enumeration order. Per-file failures are accounted in the returned
    /// tally, never propagated.
    pub fn batch(
        &self,
        dir: &Path,
        format: OutputFormat,
        recursive: bool,
    ) -> Result<BatchTally, ExtractError> {
        let files = discover::find_pdfs(dir, &self.cfg.discovery.extension, recursive).map_err(
            |e| match e.kind() {
                ErrorKind::NotFound => ExtractError::NotFound {
                    path: dir.to_path_buf(),
                },
                _ => ExtractError::Io {
                    path: dir.to_path_buf(),
                    source: e,
                },
            },
        )?;

        let mut tally = BatchTally::default();

        if files.is_empty() {
            println!("No PDF files found in {}", dir.display());
            return Ok(tally);
        }

        println!("\nFound {} PDF file(s)", files.len());
        println!("{}", "=".repeat(compose::RULE_WIDTH));

        for (i, path) in files.iter().enumerate() {
            println!(
                "\n[{}/{}] Processing: {}",
                i + 1,
                files.len(),
                util::file_name(path)
            );
            match self.extract_file(path, format, None) {
                Ok(report) => {
                    print_file_report(&report);
                    tally.record_success();
                }
                Err(err) => {
                    print_failure(path, &err);
                    tally.record_failure();
                }
            }
        }

        println!("\n{}", "=".repeat(compose::RULE_WIDTH));
        println!("Batch processing complete");
        println!("  processed: {}", tally.processed);
        if tally.failed > 0 {
            println!("  failed: {}", tally.failed);
        }

        Ok(tally)
    }
}

/// Per-file success summary: file name, page span, written paths.
pub fn print_file_report(report: &FileReport) {
    println!(
        "extracted: {} (pages {} to {})",
        util::file_name(&report.source),
        report.span.first_label(),
        report.span.last_label()
    );
    for out in &report.outputs {
        println!("  saved: {}", out.display());
    }
}

/// One diagnostic line per failed file; not-found gets its own wording.
pub fn print_failure(path: &Path, err: &ExtractError) {
    if err.is_not_found() {
        println!("error: PDF file not found: {}", path.display());
    } else {
        println!("error: processing {} failed: {err}", path.display());
    }
    warn!("extraction failed for {}: {err}", path.display());
}
