//! Output formatting and display for the command line.
//!
//! This module handles all user-facing output:
//! - Formatted status messages
//! - The merge progress bar
//! - The verbose per-file table and the closing report
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::output::OutputFormatter;
//! use pdfmerge::config::Config;
//!
//! # fn example(config: Config) {
//! let formatter = OutputFormatter::from_config(&config);
//! formatter.info("Merging 3 files");
//! formatter.success("Merge completed");
//! # }
//! ```

pub mod formatter;
pub mod progress;

pub use formatter::{MessageLevel, OutputFormatter};
pub use progress::ProgressBar;

use std::path::Path;

use crate::error::PdfMergeError;
use crate::merge::MergeReport;
use crate::utils::{format_size, has_pdf_extension};
use crate::walker::Collection;

/// Report what input collection found and ignored.
pub fn display_collection(formatter: &OutputFormatter, collection: &Collection) {
    for scan in &collection.directories {
        if scan.pdf_count > 0 {
            formatter.info(&format!(
                "Found {} PDF files in '{}'",
                scan.pdf_count,
                scan.path.display()
            ));
        }
    }

    for dir in collection.empty_dirs() {
        formatter.warning(&format!("No PDF files found in '{}'", dir.display()));
    }

    for path in &collection.skipped {
        if !collection.directories.iter().any(|scan| &scan.path == path) {
            formatter.warning(&skipped_message(path));
        }
    }
}

/// Warning for an input left out of the merge.
fn skipped_message(path: &Path) -> String {
    if has_pdf_extension(path) {
        format!("Cannot read {}, skipped", path.display())
    } else {
        format!("{}, skipped", PdfMergeError::not_a_pdf(path))
    }
}

/// Report a finished merge.
pub fn display_merge_report(formatter: &OutputFormatter, report: &MergeReport) {
    for skipped in &report.skipped {
        formatter.warning(&format!(
            "Skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        ));
    }

    formatter.success("Merge completed");
    formatter.detail("Output", &report.output.display().to_string());
    formatter.detail("Pages", &report.pages_written.to_string());
    formatter.detail("Size", &format_size(report.output_size));
}
