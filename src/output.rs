use crate::error::ExtractError;
use crate::util;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Closed set of output renderings. Anything else is rejected at the CLI or
/// config boundary instead of silently defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Txt,
    Md,
    Both,
}

impl OutputFormat {
    pub fn wants_txt(self) -> bool {
        matches!(self, Self::Txt | Self::Both)
    }

    pub fn wants_md(self) -> bool {
        matches!(self, Self::Md | Self::Both)
    }
}

/// Markdown rendering wraps the combined transcript in a small document
/// frame. Its timestamp is a second capture, taken later than the one in
/// the metadata header.
pub fn render_markdown(stem: &str, combined: &str, total_pages: usize) -> String {
    format!(
        "# {stem}\n\n**Total Pages:** {total_pages}  \n**Extracted:** {}  \n\n---\n\n{combined}",
        util::now_stamp()
    )
}

/// Write the requested renderings beside the source file, named from its
/// stem. Writes are independent of each other; an existing file at either
/// destination is overwritten.
pub fn write_outputs(
    source: &Path,
    combined: &str,
    total_pages: usize,
    format: OutputFormat,
) -> Result<Vec<PathBuf>, ExtractError> {
    let stem = util::file_stem(source);
    let mut written = Vec::new();

    if format.wants_txt() {
        let path = util::sibling_with_extension(source, "txt");
        write_text(&path, combined)?;
        written.push(path);
    }

    if format.wants_md() {
        let path = util::sibling_with_extension(source, "md");
        let md = render_markdown(&stem, combined, total_pages);
        write_text(&path, &md)?;
        written.push(path);
    }

    Ok(written)
}

fn write_text(path: &Path, content: &str) -> Result<(), ExtractError> {
    debug!("writing {} ({} bytes)", path.display(), content.len());
    std::fs::write(path, content).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })
}
