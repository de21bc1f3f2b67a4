//! Merge orchestration: validating inputs, tracking session totals and composing the output.

mod merger;
mod progress;
mod record;

pub use merger::{MergeOptions, MergeReport, PdfMerger, SkippedFile, merge_pdfs};
pub use progress::{NoProgress, ProgressSink};
pub use record::FileRecord;
