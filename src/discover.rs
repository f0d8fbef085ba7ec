use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Enumerate files under `dir` whose extension matches, case-insensitively.
/// Non-recursive matches the immediate directory only; recursive walks the
/// whole tree. Results are sorted so one call's order is stable.
pub fn find_pdfs(dir: &Path, extension: &str, recursive: bool) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect(dir, extension, recursive, &mut found)?;
    found.sort();
    Ok(found)
}

fn collect(
    dir: &Path,
    extension: &str,
    recursive: bool,
    found: &mut Vec<PathBuf>,
) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                collect(&path, extension, recursive, found)?;
            }
        } else if has_extension(&path, extension) {
            found.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}
