use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PdfMergeError, Result};
use crate::io::{LopdfEngine, PdfDocument, PdfEngine, SaveOptions};
use crate::merge::{FileRecord, NoProgress, ProgressSink};
use crate::utils::{display_name, format_size};

/// Options for a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Garbage-collect, renumber and deflate the output.
    pub compress: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self { compress: true }
    }
}

/// A file that validated earlier but could not be merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a successful merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Where the merged document was written.
    pub output: PathBuf,
    /// Number of input files whose pages made it into the output.
    pub files_merged: usize,
    /// Pages appended to the output document.
    pub pages_written: usize,
    /// Files dropped at merge time, with the reason.
    pub skipped: Vec<SkippedFile>,
    /// Size of the written file in bytes.
    pub output_size: u64,
}

/// Merge session: an ordered list of validated files and their running page total.
///
/// Files are validated when added. Invalid files are reported back to the caller and never
/// enter the session, so [`merge`](Self::merge) only ever sees files that opened cleanly.
///
/// # Examples
///
/// ```no_run
/// use pdfmerge::merge::{MergeOptions, PdfMerger};
/// use std::path::Path;
///
/// # fn example() -> pdfmerge::Result<()> {
/// let mut merger = PdfMerger::new();
/// merger.add_files(["a.pdf", "b.pdf"]);
///
/// let mut progress = |current: usize, total: usize, message: &str| {
///     println!("{current}/{total} {message}");
/// };
/// merger.merge(Path::new("merged.pdf"), &mut progress, &MergeOptions::default())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PdfMerger<E: PdfEngine = LopdfEngine> {
    engine: E,
    records: Vec<FileRecord>,
    total_pages: usize,
}

impl PdfMerger<LopdfEngine> {
    /// Create an empty session backed by `lopdf`.
    pub fn new() -> Self {
        Self::with_engine(LopdfEngine::new())
    }
}

impl Default for PdfMerger<LopdfEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PdfEngine> PdfMerger<E> {
    /// Create an empty session using `engine` for every document operation.
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            records: Vec::new(),
            total_pages: 0,
        }
    }

    /// Validate `path` and append it to the session.
    ///
    /// The returned record describes the outcome. On failure it carries the error message and
    /// the session is left unchanged.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> FileRecord {
        let path = path.as_ref();

        match self.inspect(path) {
            Ok((page_count, size_bytes)) => {
                log::debug!("added {} ({page_count} pages)", path.display());
                let record = FileRecord::valid(path, page_count, size_bytes);
                self.records.push(record.clone());
                self.total_pages += page_count;
                record
            }
            Err(err) => {
                log::warn!("rejected {}: {err}", path.display());
                FileRecord::invalid(path, err.to_string())
            }
        }
    }

    /// [`add_file`](Self::add_file) for each path, in order.
    pub fn add_files<I, P>(&mut self, paths: I) -> Vec<FileRecord>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths.into_iter().map(|path| self.add_file(path)).collect()
    }

    /// Reset the session.
    pub fn clear(&mut self) {
        self.records.clear();
        self.total_pages = 0;
    }

    /// Records in merge order.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn file_count(&self) -> usize {
        self.records.len()
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Cumulative size of the valid records in bytes.
    pub fn total_size(&self) -> u64 {
        self.records
            .iter()
            .filter(|record| record.is_valid())
            .map(FileRecord::size_bytes)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Short multi-line description of the session.
    pub fn summary(&self) -> String {
        if self.records.is_empty() {
            return "No files".to_string();
        }

        let valid = self.records.iter().filter(|r| r.is_valid()).count();
        format!(
            "Files: {valid}/{}\nTotal pages: {}\nTotal size: {}",
            self.records.len(),
            self.total_pages,
            format_size(self.total_size())
        )
    }

    /// Merge every valid record, in order, into a single document at `output`.
    ///
    /// `progress` receives `(pages_so_far, total_pages, "processing <name>")` before each
    /// file, then `(total, total, "saving")` and `(total, total, "done")`. A file that fails to
    /// open or append at this point is skipped and listed in the report.
    ///
    /// # Errors
    ///
    /// - [`PdfMergeError::NoFilesToMerge`] if the session is empty. Nothing is written.
    /// - [`PdfMergeError::MergeFailed`] if the output cannot be created or saved, or the engine
    ///   fails on the output document itself. A file that cannot be opened any more is skipped.
    pub fn merge<P>(
        &self,
        output: impl AsRef<Path>,
        progress: &mut P,
        options: &MergeOptions,
    ) -> Result<MergeReport>
    where
        P: ProgressSink + ?Sized,
    {
        let output = output.as_ref();

        if self.records.is_empty() {
            return Err(PdfMergeError::NoFilesToMerge);
        }

        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| {
                PdfMergeError::merge_failed(format!(
                    "cannot create output directory {}: {err}",
                    parent.display()
                ))
            })?;
        }

        let mut document = self
            .engine
            .new_document()
            .map_err(|err| PdfMergeError::merge_failed(err.to_string()))?;

        let total = self.total_pages;
        let mut processed = 0;
        let mut files_merged = 0;
        let mut skipped = Vec::new();

        for record in self.records.iter().filter(|record| record.is_valid()) {
            let path = record.path();
            progress.report(processed, total, &format!("processing {}", display_name(path)));

            match self.append(&mut document, path) {
                Ok(pages) => {
                    log::debug!("merged {} ({pages} pages)", path.display());
                    processed += pages;
                    files_merged += 1;
                }
                Err(err) if !err.is_recoverable() => {
                    return Err(PdfMergeError::merge_failed(format!(
                        "cannot append {}: {err}",
                        path.display()
                    )));
                }
                Err(err) => {
                    log::warn!("skipping {}: {err}", path.display());
                    skipped.push(SkippedFile {
                        path: path.to_path_buf(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        progress.report(total, total, "saving");
        document
            .save_to_path(output, &SaveOptions::from_compress(options.compress))
            .map_err(|err| PdfMergeError::merge_failed(err.to_string()))?;

        let output_size = match fs::metadata(output) {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                log::warn!("cannot read size of {}: {err}", output.display());
                0
            }
        };
        progress.report(total, total, "done");

        Ok(MergeReport {
            output: output.to_path_buf(),
            files_merged,
            pages_written: processed,
            skipped,
            output_size,
        })
    }

    /// Page count and size of a candidate file.
    fn inspect(&self, path: &Path) -> Result<(usize, u64)> {
        let exists = path.try_exists().map_err(|source| PdfMergeError::FileNotAccessible {
            path: path.to_path_buf(),
            source,
        })?;
        if !exists {
            return Err(PdfMergeError::file_not_found(path));
        }

        let size_bytes = fs::metadata(path)
            .map_err(|source| PdfMergeError::FileNotAccessible {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        let document = self.engine.open(path)?;
        Ok((document.page_count(), size_bytes))
    }

    /// Open `path` and append all of its pages to `document`.
    fn append(&self, document: &mut E::Document, path: &Path) -> Result<usize> {
        let source = self.engine.open(path)?;
        document.insert_all_pages_from(source)
    }
}

/// Merge `inputs` into `output` in one call, with compression and no progress reporting.
///
/// Inputs that fail validation are left out.
pub fn merge_pdfs<I, P>(inputs: I, output: impl AsRef<Path>) -> Result<MergeReport>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut merger = PdfMerger::new();
    merger.add_files(inputs);
    merger.merge(output, &mut NoProgress, &MergeOptions::default())
}
