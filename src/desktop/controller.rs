use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use crate::config::DEFAULT_OUTPUT;
use crate::desktop::{BrowseEntry, SortOrder, UiDispatcher, UiEvent, browse, run_merge};
use crate::error::Result;
use crate::merge::MergeOptions;
use crate::utils::display_name;
use crate::walker::collect_dropped;

/// Why [`DesktopController::start_merge`] did not start a merge.
#[derive(Debug, thiserror::Error)]
pub enum StartRefused {
    #[error("Add PDF files first")]
    NoFiles,

    #[error("Set an output file name first")]
    NoOutput,

    #[error("A merge is already running")]
    Busy,

    #[error("Failed to start merge worker: {0}")]
    Spawn(#[from] io::Error),
}

/// Files added by [`DesktopController::add_paths`] and inputs that were ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutcome {
    pub added: Vec<PathBuf>,
    /// Non-PDF files, missing paths and directories without PDFs.
    pub skipped: Vec<PathBuf>,
}

/// State of the desktop merge window.
#[derive(Debug)]
pub struct DesktopController {
    files: Vec<PathBuf>,
    output: String,
    last_dir: PathBuf,
    options: MergeOptions,
    merging: Arc<AtomicBool>,
}

impl DesktopController {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            output: DEFAULT_OUTPUT.to_string(),
            last_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            options: MergeOptions::default(),
            merging: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Files in merge order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// File names as shown in the list widget.
    pub fn display_names(&self) -> Vec<String> {
        self.files.iter().map(|path| display_name(path)).collect()
    }

    /// Add a drag-and-drop or file-dialog payload.
    ///
    /// Directories contribute their immediate PDFs. Files already in the list are ignored.
    pub fn add_paths<I, S>(&mut self, payload: I) -> AddOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let collection = collect_dropped(payload, &self.files);
        for path in &collection.skipped {
            log::warn!("not added: {}", path.display());
        }

        self.files.extend(collection.files.iter().cloned());
        AddOutcome {
            added: collection.files,
            skipped: collection.skipped,
        }
    }

    /// Remove the entries at `indices`. Out-of-range indices are ignored.
    pub fn remove(&mut self, indices: &[usize]) {
        let mut indices = indices.to_vec();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices.dedup();

        for idx in indices {
            if idx < self.files.len() {
                self.files.remove(idx);
            }
        }
    }

    /// Move the entries at `indices` one position up.
    ///
    /// An entry already at the top, or blocked by a selected entry that cannot move, stays
    /// put. Returns the new indices of the moved selection.
    pub fn move_up(&mut self, indices: &[usize]) -> Vec<usize> {
        let mut selected = self.normalize(indices);
        selected.sort_unstable();

        let mut floor = 0;
        let mut moved = Vec::with_capacity(selected.len());
        for idx in selected {
            if idx == floor {
                floor += 1;
                moved.push(idx);
            } else {
                self.files.swap(idx - 1, idx);
                moved.push(idx - 1);
            }
        }
        moved
    }

    /// Move the entries at `indices` one position down. Mirror of [`move_up`](Self::move_up).
    pub fn move_down(&mut self, indices: &[usize]) -> Vec<usize> {
        let mut selected = self.normalize(indices);
        selected.sort_unstable_by(|a, b| b.cmp(a));

        let Some(mut ceiling) = self.files.len().checked_sub(1) else {
            return Vec::new();
        };
        let mut moved = Vec::with_capacity(selected.len());
        for idx in selected {
            if idx == ceiling {
                ceiling = ceiling.saturating_sub(1);
                moved.push(idx);
            } else {
                self.files.swap(idx, idx + 1);
                moved.push(idx + 1);
            }
        }
        moved.reverse();
        moved
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn set_output(&mut self, output: impl Into<String>) {
        self.output = output.into();
    }

    pub fn set_compress(&mut self, compress: bool) {
        self.options.compress = compress;
    }

    /// Directory the file browser opens in.
    pub fn last_dir(&self) -> &Path {
        &self.last_dir
    }

    /// List `dir` for the file browser and remember it as the last directory.
    pub fn browse(&mut self, dir: &Path, sort: SortOrder) -> Result<Vec<BrowseEntry>> {
        let entries = browse(dir, sort)?;
        self.last_dir = dir.to_path_buf();
        Ok(entries)
    }

    /// Whether a merge worker is running.
    pub fn is_merging(&self) -> bool {
        self.merging.load(Ordering::SeqCst)
    }

    /// Start merging the current list on a worker thread.
    ///
    /// Progress and the outcome are posted through `dispatcher`, followed by
    /// [`UiEvent::Idle`] once the worker is done. A panicking merge is reported as
    /// [`UiEvent::Failed`] and still ends with `Idle`.
    pub fn start_merge<D>(
        &self,
        dispatcher: D,
    ) -> std::result::Result<JoinHandle<()>, StartRefused>
    where
        D: UiDispatcher + Send + 'static,
    {
        if self.files.is_empty() {
            return Err(StartRefused::NoFiles);
        }

        let output = self.output.trim();
        if output.is_empty() {
            return Err(StartRefused::NoOutput);
        }

        if self.merging.swap(true, Ordering::SeqCst) {
            return Err(StartRefused::Busy);
        }

        let files = self.files.clone();
        let output = PathBuf::from(output);
        let options = self.options;
        let merging = Arc::clone(&self.merging);

        let spawned = thread::Builder::new()
            .name("pdfmerge-worker".to_string())
            .spawn(move || {
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                    run_merge(&files, &output, &options, &dispatcher)
                }));
                merging.store(false, Ordering::SeqCst);

                if outcome.is_err() {
                    log::error!("merge worker panicked while writing {}", output.display());
                    dispatcher.dispatch(UiEvent::Failed {
                        message: "Merge stopped unexpectedly".to_string(),
                    });
                }
                dispatcher.dispatch(UiEvent::Idle);
            });

        spawned.map_err(|err| {
            self.merging.store(false, Ordering::SeqCst);
            StartRefused::Spawn(err)
        })
    }

    /// Drop out-of-range and duplicate indices.
    fn normalize(&self, indices: &[usize]) -> Vec<usize> {
        let mut selected: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&idx| idx < self.files.len())
            .collect();
        selected.sort_unstable();
        selected.dedup();
        selected
    }
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}
