//! pdfmerge: merge multiple PDF files into a single document.
//!
//! The crate is organised around one orchestrator, [`PdfMerger`], which validates input files,
//! keeps running totals and writes the merged output while reporting progress. Two front ends
//! drive it: the command line ([`cli`]) and a toolkit-agnostic desktop controller
//! ([`desktop`]).
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::{MergeOptions, PdfMerger};
//! use pdfmerge::merge::NoProgress;
//!
//! # fn example() -> pdfmerge::Result<()> {
//! let mut merger = PdfMerger::new();
//! for record in merger.add_files(["intro.pdf", "body.pdf"]) {
//!     if let Some(error) = record.error() {
//!         eprintln!("{error}");
//!     }
//! }
//!
//! let report = merger.merge("book.pdf", &mut NoProgress, &MergeOptions::default())?;
//! println!("{} pages written", report.pages_written);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod desktop;
mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod utils;
pub mod walker;

#[cfg(test)]
mod test_support;

pub use error::*;
pub use merge::{FileRecord, MergeOptions, MergeReport, PdfMerger, merge_pdfs};
