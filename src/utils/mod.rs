//! Small helpers shared by the collector, the merger and the presentation layer.

use std::path::Path;

const KB: u64 = 1024;
const MB: u64 = KB * 1024;

/// Format a byte count with a binary unit suffix.
///
/// Values below 1 KiB are printed as whole bytes; KB and MB carry two decimals.
///
/// ```
/// use pdfmerge::utils::format_size;
///
/// assert_eq!(format_size(500), "500B");
/// assert_eq!(format_size(2048), "2.00KB");
/// assert_eq!(format_size(5 * 1024 * 1024), "5.00MB");
/// ```
pub fn format_size(size: u64) -> String {
    if size < KB {
        format!("{size}B")
    } else if size < MB {
        format!("{:.2}KB", size as f64 / KB as f64)
    } else {
        format!("{:.2}MB", size as f64 / MB as f64)
    }
}

/// Check whether a path names a `.pdf` file, ignoring ASCII case.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Final path component for display, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Percentage of `current` over `total`.
///
/// Returns `None` when `total` is zero: the percentage is undefined, which is not an error.
pub fn percent(current: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(current as f64 / total as f64 * 100.0)
    }
}

/// Whether `a` and `b` name the same file.
///
/// Paths that exist are compared after canonicalization, so `./out.pdf` matches `out.pdf`.
/// Otherwise the paths are compared as given.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
