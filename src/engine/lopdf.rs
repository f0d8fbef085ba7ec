use super::{PdfDocument, PdfEngine};
use crate::config::Config;
use crate::error::ExtractError;
use ::lopdf::Document;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Backend over the `lopdf` parser. Holds the config so input limits are
/// enforced at open time, before any page is touched.
pub struct LopdfEngine {
    cfg: Config,
}

impl LopdfEngine {
    pub fn new(cfg: &Config) -> Self {
        Self { cfg: cfg.clone() }
    }
}

impl PdfEngine for LopdfEngine {
    type Doc = LopdfDocument;

    fn open(&self, path: &Path) -> Result<Self::Doc, ExtractError> {
        let meta = std::fs::metadata(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExtractError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ExtractError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        if meta.len() > self.cfg.limits.max_input_file_bytes {
            return Err(ExtractError::invalid(format!(
                "input exceeds max_input_file_bytes: {} > {}",
                meta.len(),
                self.cfg.limits.max_input_file_bytes
            )));
        }

        let doc = Document::load(path).map_err(|e| ExtractError::Decode {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

        // lopdf numbers pages 1-based; BTreeMap keys come out ascending.
        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();

        if pages.len() > self.cfg.limits.max_input_pages {
            return Err(ExtractError::invalid(format!(
                "input exceeds max_input_pages: {} > {}",
                pages.len(),
                self.cfg.limits.max_input_pages
            )));
        }

        debug!("opened {} page_count={}", path.display(), pages.len());

        Ok(LopdfDocument {
            path: path.to_path_buf(),
            doc,
            pages,
        })
    }
}

pub struct LopdfDocument {
    path: PathBuf,
    doc: Document,
    pages: Vec<u32>,
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractError> {
        let page_number =
            self.pages
                .get(index)
                .copied()
                .ok_or_else(|| ExtractError::Decode {
                    path: self.path.clone(),
                    detail: format!("page index {index} out of bounds"),
                })?;
        self.doc
            .extract_text(&[page_number])
            .map_err(|e| ExtractError::Decode {
                path: self.path.clone(),
                detail: format!("page {page_number}: {e}"),
            })
    }
}
