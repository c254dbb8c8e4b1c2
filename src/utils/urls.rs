//! Page-source list parsing.

use std::io;
use std::path::Path;

/// Lines starting with this marker are template/comment lines, not URLs
const MARKER_PREFIX: &str = "API_URL";

/// Read the page-source URL list from a plain-text file.
///
/// One URL per line; blank lines and lines starting with the `API_URL`
/// marker prefix are skipped. Order is preserved.
pub fn read_url_list(path: &Path) -> io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(MARKER_PREFIX))
        .map(str::to_string)
        .collect())
}
