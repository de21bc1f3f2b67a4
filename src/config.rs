//! Configuration for a command-line merge.
//!
//! Transforms parsed CLI arguments into a validated configuration that drives collection and
//! merging.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{PdfMergeError, Result};
use crate::merge::MergeOptions;
use crate::utils::is_same_file;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "merged_output.pdf";

/// Complete configuration for a merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Raw inputs: files, directories or glob patterns, in merge order.
    pub inputs: Vec<String>,

    /// Output PDF file path.
    pub output: PathBuf,

    /// Compress the output document.
    pub compress: bool,

    /// Print the per-file table before merging.
    pub verbose: bool,

    /// Suppress non-error output.
    pub quiet: bool,
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No inputs are specified
    /// - Verbose and quiet modes are both enabled
    /// - The output path is blank or names one of the inputs
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(PdfMergeError::invalid_config("No input files specified"));
        }

        if self.verbose && self.quiet {
            return Err(PdfMergeError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }

        if self.output.as_os_str().is_empty() {
            return Err(PdfMergeError::invalid_config("Output path is empty"));
        }

        if self
            .inputs
            .iter()
            .any(|input| is_same_file(Path::new(input), &self.output))
        {
            return Err(PdfMergeError::invalid_config(format!(
                "Output file cannot be the same as an input file: {}",
                self.output.display()
            )));
        }

        Ok(())
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            compress: self.compress,
        }
    }
}

impl TryFrom<&Cli> for Config {
    type Error = PdfMergeError;

    fn try_from(cli: &Cli) -> Result<Self> {
        let config = Config {
            inputs: cli.inputs.clone(),
            output: cli.output.clone(),
            compress: !cli.no_compress,
            verbose: cli.verbose,
            quiet: cli.quiet,
        };

        config.validate()?;
        Ok(config)
    }
}
