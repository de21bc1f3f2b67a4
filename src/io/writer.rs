//! Saving documents to disk.
//!
//! Output is written to a sibling `<name>.part` file and renamed over the target once the
//! write has been flushed. A failed write removes the partial file and leaves any existing
//! output untouched.

use lopdf::Document;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PdfMergeError, Result};
use crate::io::SaveOptions;

/// Buffer size for writing (in bytes).
const WRITE_BUFFER_SIZE: usize = 64 * 1024;

/// Apply `options` to `doc` and write it atomically to `path`.
pub fn save_atomic(doc: &mut Document, path: &Path, options: &SaveOptions) -> Result<()> {
    prepare(doc, options);

    let temp_path = temp_path_for(path);
    let result = write_to(doc, &temp_path).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|source| PdfMergeError::FailedToWrite {
            path: path.to_path_buf(),
            source,
        })
    });

    if result.is_err()
        && temp_path.exists()
        && let Err(err) = fs::remove_file(&temp_path)
    {
        log::warn!("could not remove {}: {err}", temp_path.display());
    }

    result
}

/// Cleanup passes selected by `options`.
fn prepare(doc: &mut Document, options: &SaveOptions) {
    if options.garbage_collect {
        let pruned = doc.prune_objects();
        log::debug!("pruned {} unreachable objects", pruned.len());
    }

    if options.clean {
        doc.renumber_objects();
    }

    if options.deflate {
        doc.compress();
    }
}

fn write_to(doc: &mut Document, path: &Path) -> Result<()> {
    let failed = |source: std::io::Error| PdfMergeError::FailedToWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(failed)?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

    doc.save_to(&mut writer).map_err(|e| PdfMergeError::FailedToWrite {
        path: path.to_path_buf(),
        source: std::io::Error::other(e),
    })?;
    writer.flush().map_err(failed)?;

    Ok(())
}

/// Sibling path used while the output is being written.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".part");
    path.with_file_name(name)
}
