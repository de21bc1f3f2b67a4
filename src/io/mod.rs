//! PDF engine seam.
//!
//! The merge orchestrator never touches `lopdf` directly. It works against an explicit
//! [`PdfEngine`] handle that knows how to open a document and create an empty one, and a
//! [`PdfDocument`] that can count its pages, absorb the pages of another document and save
//! itself.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::io::{LopdfEngine, PdfDocument, PdfEngine, SaveOptions};
//! use std::path::Path;
//!
//! # fn example() -> pdfmerge::Result<()> {
//! let engine = LopdfEngine::new();
//! let mut output = engine.new_document()?;
//! let source = engine.open(Path::new("input.pdf"))?;
//! output.insert_all_pages_from(source)?;
//! output.save_to_path(Path::new("output.pdf"), &SaveOptions::compressed())?;
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod reader;
pub mod writer;

pub use reader::LopdfEngine;

use crate::error::Result;
use std::path::Path;

/// Options applied when a document is written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Drop objects no longer reachable from the document root.
    pub garbage_collect: bool,
    /// Compress content streams.
    pub deflate: bool,
    /// Renumber objects densely before writing.
    pub clean: bool,
}

impl SaveOptions {
    /// Maximum cleanup and stream compression.
    pub fn compressed() -> Self {
        Self {
            garbage_collect: true,
            deflate: true,
            clean: true,
        }
    }

    /// Write the document as composed.
    pub fn uncompressed() -> Self {
        Self {
            garbage_collect: false,
            deflate: false,
            clean: false,
        }
    }

    /// Pick [`compressed`](Self::compressed) or [`uncompressed`](Self::uncompressed).
    pub fn from_compress(compress: bool) -> Self {
        if compress {
            Self::compressed()
        } else {
            Self::uncompressed()
        }
    }
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self::compressed()
    }
}

/// An open PDF document.
///
/// Dropping the value releases the document.
pub trait PdfDocument: Sized {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Append every page of `source` after the pages already present, in order.
    ///
    /// Returns the number of pages appended. `source` is consumed.
    fn insert_all_pages_from(&mut self, source: Self) -> Result<usize>;

    /// Write the document to `path`.
    fn save_to_path(&mut self, path: &Path, options: &SaveOptions) -> Result<()>;
}

/// Factory for [`PdfDocument`]s.
pub trait PdfEngine {
    /// Document type produced by this engine.
    type Document: PdfDocument;

    /// Open and parse an existing PDF file.
    fn open(&self, path: &Path) -> Result<Self::Document>;

    /// Create a new document with no pages.
    fn new_document(&self) -> Result<Self::Document>;
}
