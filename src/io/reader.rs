//! `lopdf`-backed engine: opening and creating documents.

use lopdf::{Document, Object, dictionary};
use std::path::Path;

use crate::error::{PdfMergeError, Result};
use crate::io::PdfEngine;

/// PDF version written for newly created documents.
const OUTPUT_VERSION: &str = "1.5";

/// [`PdfEngine`] implemented on top of `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfEngine;

impl LopdfEngine {
    /// Create a new engine handle.
    pub fn new() -> Self {
        Self
    }

    /// Check that `path` exists and is not a directory.
    pub fn check_path_exists(path: &Path) -> Result<()> {
        let exists = path.try_exists().map_err(|source| PdfMergeError::FileNotAccessible {
            path: path.to_path_buf(),
            source,
        })?;
        if !exists {
            return Err(PdfMergeError::file_not_found(path));
        }

        if path.is_dir() {
            return Err(PdfMergeError::invalid_pdf(path, "is a directory"));
        }

        Ok(())
    }
}

impl PdfEngine for LopdfEngine {
    type Document = Document;

    fn open(&self, path: &Path) -> Result<Document> {
        Self::check_path_exists(path)?;
        let doc =
            Document::load(path).map_err(|err| PdfMergeError::invalid_pdf(path, err.to_string()))?;
        log::debug!("opened {} ({} pages)", path.display(), doc.get_pages().len());
        Ok(doc)
    }

    fn new_document(&self) -> Result<Document> {
        let mut doc = Document::with_version(OUTPUT_VERSION);

        let pages_id = doc.new_object_id();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => Object::Array(Vec::new()),
            "Count" => Object::Integer(0),
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        Ok(doc)
    }
}
