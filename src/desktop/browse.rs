//! Directory listing for the file browser dialog.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

use crate::error::{PdfMergeError, Result};
use crate::utils::has_pdf_extension;

/// Sort order for [`browse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// By name, ignoring case.
    #[default]
    Name,
    /// By modification time, newest first.
    Modified,
}

/// One row of the file browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub modified: Option<SystemTime>,
}

/// List the sub-directories and PDF files directly inside `dir`.
///
/// Hidden entries (names starting with `.`) are left out. Directories come first, each group
/// sorted by `sort`.
///
/// # Errors
///
/// [`PdfMergeError::FileNotAccessible`] if `dir` itself cannot be read.
pub fn browse(dir: &Path, sort: SortOrder) -> Result<Vec<BrowseEntry>> {
    let mut dirs = Vec::new();
    let mut pdfs = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(PdfMergeError::FileNotAccessible {
                    path: dir.to_path_buf(),
                    source: err.into(),
                });
            }
            Err(err) => {
                log::debug!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let is_dir = entry.path().is_dir();
        if !is_dir && !(entry.path().is_file() && has_pdf_extension(entry.path())) {
            continue;
        }

        let row = BrowseEntry {
            modified: entry.metadata().ok().and_then(|m| m.modified().ok()),
            path: entry.into_path(),
            name,
            is_dir,
        };

        if is_dir {
            dirs.push(row);
        } else {
            pdfs.push(row);
        }
    }

    dirs.sort_by(|a, b| compare(a, b, sort));
    pdfs.sort_by(|a, b| compare(a, b, sort));
    dirs.extend(pdfs);

    Ok(dirs)
}

fn compare(a: &BrowseEntry, b: &BrowseEntry, sort: SortOrder) -> Ordering {
    match sort {
        SortOrder::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortOrder::Modified => b.modified.cmp(&a.modified),
    }
}
