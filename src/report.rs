use crate::page_span::PageSpan;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of one successful single-file extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub source: PathBuf,
    pub total_pages: usize,
    pub span: PageSpan,
    pub outputs: Vec<PathBuf>,
}

/// Success/failure accounting for one batch run. A value threaded through
/// the sequential loop, never ambient state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BatchTally {
    pub processed: usize,
    pub failed: usize,
}

impl BatchTally {
    pub fn record_success(&mut self) {
        self.processed += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn total(&self) -> usize {
        self.processed + self.failed
    }
}
