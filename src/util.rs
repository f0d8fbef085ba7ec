use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::macros::format_description;

/// Local wall-clock stamp used in transcript headers, `YYYY-MM-DD HH:MM:SS`.
/// Falls back to UTC when the local offset cannot be determined.
pub fn now_stamp() -> String {
    let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&fmt)
        .unwrap_or_else(|_| "1970-01-01 00:00:00".to_string())
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}

/// Path next to `source`, named from its stem with `ext` appended.
pub fn sibling_with_extension(source: &Path, ext: &str) -> PathBuf {
    let dir = source.parent().filter(|p| !p.as_os_str().is_empty());
    let name = format!("{}.{}", file_stem(source), ext);
    match dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
