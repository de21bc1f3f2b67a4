//! Command-line interface.
//!
//! Defines the argument structure with `clap` and drives a merge from parsed arguments to the
//! process exit code.
//!
//! # Examples
//!
//! ```no_run
//! let code = pdfmerge::cli::run_cli(["pdfmerge", "a.pdf", "b.pdf", "-o", "book.pdf"]);
//! std::process::exit(code);
//! ```

use anyhow::Context;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_OUTPUT};
use crate::error::PdfMergeError;
use crate::merge::PdfMerger;
use crate::output::{OutputFormatter, ProgressBar, display_collection, display_merge_report};
use crate::utils::is_same_file;
use crate::walker::collect_inputs;

/// Merge PDF files into a single document.
///
/// Inputs are merged in the order given. Directories contribute every PDF below them, sorted
/// by path.
#[derive(Parser, Debug)]
#[command(name = "pdfmerge")]
#[command(version)]
#[command(about = "Merge PDF files into a single document", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// PDF files, directories or glob patterns to merge (in order)
    ///
    /// Examples:
    ///   pdfmerge a.pdf b.pdf -o out.pdf
    ///   pdfmerge scans/ -o scans.pdf
    ///   pdfmerge 'chapter*.pdf' -o book.pdf
    #[arg(required = true, value_name = "PATH")]
    pub inputs: Vec<String>,

    /// Output PDF file path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Write the output without compression (faster, larger file)
    #[arg(long)]
    pub no_compress: bool,

    /// Show a per-file table (status, size, pages or error) before merging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all output except warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse `args`, run the merge and return the process exit code.
///
/// Returns 0 on success and 1 on any error. Help and version requests print and return 0.
pub fn run_cli<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            err.print().ok();
            return if err.use_stderr() { 1 } else { 0 };
        }
    };

    match run(&cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err:#}");
            1
        }
    }
}

/// Main application logic.
fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::try_from(cli)?;
    let formatter = &OutputFormatter::from_config(&config);
    formatter.debug(&format!(
        "Output: {} (compression {})",
        config.output.display(),
        if config.compress { "on" } else { "off" }
    ));

    let mut collection = collect_inputs(&config.inputs)?;
    display_collection(formatter, &collection);

    let before = collection.files.len();
    collection
        .files
        .retain(|path| !is_same_file(path, &config.output));
    if collection.files.len() != before {
        formatter.warning(&format!(
            "Excluding the output file {} from the inputs",
            config.output.display()
        ));
    }

    if collection.is_empty() {
        return Err(PdfMergeError::NoPdfFilesFound.into());
    }

    formatter.section(&format!(
        "Validating {} PDF files...",
        collection.files.len()
    ));

    let mut merger = PdfMerger::new();
    let records = merger.add_files(&collection.files);

    if formatter.is_verbose() {
        formatter.file_table(&records);
    } else {
        for record in records.iter().filter(|record| !record.is_valid()) {
            if let Some(error) = record.error() {
                formatter.error(error);
            }
        }
    }

    if merger.is_empty() {
        return Err(PdfMergeError::NoValidFiles.into());
    }

    formatter.section(&merger.summary());
    formatter.section(&format!("Merging into '{}'...", config.output.display()));

    let mut progress = if formatter.is_quiet() {
        ProgressBar::disabled()
    } else {
        ProgressBar::new()
    };

    let report = merger
        .merge(&config.output, &mut progress, &config.merge_options())
        .with_context(|| format!("Failed to create {}", config.output.display()))?;

    display_merge_report(formatter, &report);
    Ok(())
}
