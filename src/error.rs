//! Error types for pdfmerge.
//!
//! Errors fall into three groups:
//!
//! - **Input errors**: a named path does not exist or is not a PDF.
//! - **Validation errors**: the file exists but the PDF engine cannot open it.
//! - **Merge errors**: empty input, or the engine failed while composing or saving.
//!
//! Per-file errors are recorded and reported; only [`PdfMergeError::NoFilesToMerge`] and
//! [`PdfMergeError::MergeFailed`] abort a merge.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfmerge operations.
pub type Result<T> = std::result::Result<T, PdfMergeError>;

/// Main error type for pdfmerge operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfMergeError {
    /// Input path does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Input file does not carry a `.pdf` extension.
    #[error("Not a PDF file: {}", .path.display())]
    NotAPdf {
        /// Offending path.
        path: PathBuf,
    },

    /// Input file exists but its metadata or contents cannot be read.
    #[error("Cannot read file: {}\n  Reason: {source}", .path.display())]
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The PDF engine could not open the file.
    #[error("Invalid PDF file: {}\n  Reason: {reason}", .path.display())]
    InvalidPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason reported by the engine.
        reason: String,
    },

    /// A glob pattern could not be parsed.
    #[error("Invalid glob pattern: {pattern}\n  Reason: {source}")]
    InvalidPattern {
        /// Pattern as given.
        pattern: String,
        /// Parse error reported by `glob`.
        #[source]
        source: glob::PatternError,
    },

    /// The output file could not be written.
    #[error("Failed to write output: {}\n  Reason: {source}", .path.display())]
    FailedToWrite {
        /// Path being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// `merge` was called on an empty session.
    #[error("No PDF files to merge")]
    NoFilesToMerge,

    /// Input collection produced no candidate PDF files.
    #[error("No PDF files found to merge")]
    NoPdfFilesFound,

    /// Every candidate file failed validation.
    #[error("No valid PDF files to merge")]
    NoValidFiles,

    /// The engine failed while composing or saving the output document.
    #[error("Merge failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Invalid combination of options.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },

    /// Error raised by the PDF engine.
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
}

impl PdfMergeError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a NotAPdf error.
    pub fn not_a_pdf(path: impl Into<PathBuf>) -> Self {
        Self::NotAPdf { path: path.into() }
    }

    /// Create an InvalidPdf error.
    pub fn invalid_pdf(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidPdf {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Check if this error only concerns a single input file.
    ///
    /// Recoverable errors are recorded against that file and the batch continues.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::NotAPdf { .. }
                | Self::FileNotAccessible { .. }
                | Self::InvalidPdf { .. }
        )
    }
}
