//! Input collection.
//!
//! Turns user-supplied paths (files, directories, glob patterns, drag-and-drop payloads) into a
//! flat, ordered list of PDF files. Directory contents are sorted by path; explicitly named
//! files keep the order they were given in.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{PdfMergeError, Result};
use crate::utils::has_pdf_extension;

/// How far a directory input is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Every PDF below the directory.
    Recursive,
    /// Only the directory's immediate entries.
    Shallow,
}

/// A directory input and the number of PDFs it contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryScan {
    pub path: PathBuf,
    pub pdf_count: usize,
}

/// Result of collecting a batch of inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// PDF files, in merge order.
    pub files: Vec<PathBuf>,
    /// Inputs that were ignored: non-PDF files, unreadable or empty directories.
    pub skipped: Vec<PathBuf>,
    /// Directory inputs that were expanded.
    pub directories: Vec<DirectoryScan>,
}

impl Collection {
    /// Directory inputs that contained no PDF files.
    pub fn empty_dirs(&self) -> impl Iterator<Item = &Path> {
        self.directories
            .iter()
            .filter(|scan| scan.pdf_count == 0)
            .map(|scan| scan.path.as_path())
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Collect command-line inputs.
///
/// Directories are expanded recursively. An argument that does not exist but contains glob
/// metacharacters is expanded as a pattern.
///
/// # Errors
///
/// [`PdfMergeError::FileNotFound`] for a path that does not exist or a pattern that matches
/// nothing, [`PdfMergeError::InvalidPattern`] for a malformed pattern.
pub fn collect_inputs<I, S>(inputs: I) -> Result<Collection>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut collection = Collection::default();

    for input in inputs {
        let input = input.as_ref();
        let path = Path::new(input);

        if path.exists() {
            collect_path(path, Depth::Recursive, &mut collection);
        } else if is_glob_pattern(input) {
            let matches = expand_glob(input)?;
            if matches.is_empty() {
                return Err(PdfMergeError::file_not_found(path));
            }
            for matched in &matches {
                collect_path(matched, Depth::Recursive, &mut collection);
            }
        } else {
            return Err(PdfMergeError::file_not_found(path));
        }
    }

    log::debug!(
        "collected {} files ({} skipped)",
        collection.files.len(),
        collection.skipped.len()
    );
    Ok(collection)
}

/// Collect a drag-and-drop or file-dialog payload for the desktop file list.
///
/// Directories are listed without recursion. Paths already in `existing`, or earlier in the
/// payload, are ignored. Nothing here is fatal: missing paths end up in
/// [`Collection::skipped`].
pub fn collect_dropped<I, S>(payload: I, existing: &[PathBuf]) -> Collection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut collection = Collection::default();

    for raw in payload {
        let path = decode_drop_path(raw.as_ref());

        if path.is_dir() {
            let before = collection.files.len();
            collect_path(&path, Depth::Shallow, &mut collection);
            if collection.files.len() == before {
                collection.skipped.push(path);
            }
        } else if path.is_file() && has_pdf_extension(&path) {
            collection.files.push(path);
        } else {
            collection.skipped.push(path);
        }
    }

    let mut seen: Vec<PathBuf> = existing.to_vec();
    collection.files.retain(|path| {
        if seen.contains(path) {
            false
        } else {
            seen.push(path.clone());
            true
        }
    });

    collection
}

/// Turn one drag-and-drop entry into a filesystem path.
///
/// Strips a `file://` prefix and decodes `%20` to a space.
pub fn decode_drop_path(raw: &str) -> PathBuf {
    let raw = raw.strip_prefix("file://").unwrap_or(raw);
    PathBuf::from(raw.replace("%20", " "))
}

/// Whether `input` contains glob metacharacters.
pub fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// PDF files inside `dir`, sorted by path.
///
/// Entries that cannot be read are returned separately and logged.
pub fn find_pdfs(dir: &Path, depth: Depth) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let max_depth = match depth {
        Depth::Recursive => usize::MAX,
        Depth::Shallow => 1,
    };

    let mut pdfs = Vec::new();
    let mut unreadable = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
    {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && has_pdf_extension(entry.path()) {
                    pdfs.push(entry.into_path());
                }
            }
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                log::warn!("cannot read {}: {err}", path.display());
                unreadable.push(path);
            }
        }
    }

    pdfs.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    (pdfs, unreadable)
}

fn collect_path(path: &Path, depth: Depth, collection: &mut Collection) {
    if path.is_dir() {
        let (pdfs, unreadable) = find_pdfs(path, depth);
        if pdfs.is_empty() {
            log::warn!("no PDF files in {}", path.display());
        }
        collection.directories.push(DirectoryScan {
            path: path.to_path_buf(),
            pdf_count: pdfs.len(),
        });
        collection.files.extend(pdfs);
        collection.skipped.extend(unreadable);
    } else if has_pdf_extension(path) {
        collection.files.push(path.to_path_buf());
    } else {
        log::debug!("skipping non-PDF input {}", path.display());
        collection.skipped.push(path.to_path_buf());
    }
}

/// Expand a single glob pattern into filesystem paths, sorted.
fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|source| PdfMergeError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut matches: Vec<PathBuf> = paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                log::warn!("skipping unreadable match: {err}");
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(matches)
}
