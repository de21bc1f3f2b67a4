//! The merge job run off the UI thread.

use std::path::{Path, PathBuf};

use crate::desktop::{UiDispatcher, UiEvent};
use crate::merge::{MergeOptions, MergeReport, PdfMerger};
use crate::utils::percent;

/// Validate `files`, merge them into `output` and post the outcome through `dispatcher`.
///
/// Every progress callback becomes a [`UiEvent::Progress`]; the run ends with exactly one
/// [`UiEvent::Finished`] or [`UiEvent::Failed`].
pub fn run_merge<D>(files: &[PathBuf], output: &Path, options: &MergeOptions, dispatcher: &D)
where
    D: UiDispatcher + ?Sized,
{
    let mut merger = PdfMerger::new();
    merger.add_files(files);

    let mut progress = |current: usize, total: usize, _message: &str| {
        dispatcher.dispatch(UiEvent::Progress {
            percent: percent_u8(current, total),
        });
    };

    match merger.merge(output, &mut progress, options) {
        Ok(report) => dispatcher.dispatch(UiEvent::Finished {
            message: finished_message(&report),
        }),
        Err(err) => {
            log::error!("merge into {} failed: {err}", output.display());
            dispatcher.dispatch(UiEvent::Failed {
                message: err.to_string(),
            });
        }
    }
}

/// Whole-number percentage for a progress widget; 0 when undefined.
fn percent_u8(current: usize, total: usize) -> u8 {
    percent(current, total).map_or(0, |p| p.clamp(0.0, 100.0) as u8)
}

fn finished_message(report: &MergeReport) -> String {
    let mut message = format!(
        "PDF merge completed: {} pages written to {}",
        report.pages_written,
        report.output.display()
    );
    if !report.skipped.is_empty() {
        message.push_str(&format!(" ({} files skipped)", report.skipped.len()));
    }
    message
}
