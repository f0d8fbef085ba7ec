use crate::error::ExtractError;
use serde::{Deserialize, Serialize};

/// Zero-indexed half-open window of pages to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpan {
    pub start: usize,
    pub end: usize,
}

impl PageSpan {
    /// Clamp a requested window against the document's page count. No
    /// request selects every page. Out-of-bounds values are clamped, never
    /// rejected; an empty result extracts nothing and is not an error.
    pub fn resolve(total_pages: usize, requested: Option<(i64, i64)>) -> PageSpan {
        let Some((req_start, req_end)) = requested else {
            return PageSpan {
                start: 0,
                end: total_pages,
            };
        };
        let end = req_end.clamp(0, total_pages as i64) as usize;
        let start = req_start.clamp(0, end as i64) as usize;
        PageSpan { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn page_count(&self) -> usize {
        self.end - self.start
    }

    /// 1-indexed bound for display ("pages X to Y").
    pub fn first_label(&self) -> usize {
        self.start + 1
    }

    pub fn last_label(&self) -> usize {
        self.end
    }
}

/// Parse a 1-indexed inclusive `START-END` selection into the 0-indexed
/// half-open request handed to [`PageSpan::resolve`].
pub fn parse_page_spec(spec: &str) -> Result<(i64, i64), ExtractError> {
    let (start, end) = spec.split_once('-').ok_or_else(|| {
        ExtractError::invalid(format!("page range must look like START-END: {spec}"))
    })?;
    let start: i64 = start.trim().parse().map_err(|_| {
        ExtractError::invalid(format!("page range bound is not a number: {}", start.trim()))
    })?;
    let end: i64 = end.trim().parse().map_err(|_| {
        ExtractError::invalid(format!("page range bound is not a number: {}", end.trim()))
    })?;
    Ok((start - 1, end))
}
