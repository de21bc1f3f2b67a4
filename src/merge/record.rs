use std::path::{Path, PathBuf};

/// Validation result for one candidate input file.
///
/// A record is either valid, with a page count and size, or invalid, with an error message.
/// The two constructors are the only way to build one, so a valid record never carries an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: PathBuf,
    page_count: usize,
    size_bytes: u64,
    error: Option<String>,
}

impl FileRecord {
    /// Record for a file the engine opened and page-counted.
    pub fn valid(path: impl Into<PathBuf>, page_count: usize, size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            page_count,
            size_bytes,
            error: None,
        }
    }

    /// Record for a file that failed validation.
    pub fn invalid(path: impl Into<PathBuf>, error: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            page_count: 0,
            size_bytes: 0,
            error: Some(error.into()),
        }
    }

    /// Path as given by the caller.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Why validation failed, for invalid records.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
