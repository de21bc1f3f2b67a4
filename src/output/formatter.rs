//! Message formatting and display.
//!
//! Informational output goes to stdout and is suppressed in quiet mode. Warnings and errors go
//! to stderr and are always shown.
//!
//! # Examples
//!
//! ```
//! use pdfmerge::output::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("Validating 3 PDF files...");
//! formatter.success("Merge completed");
//! formatter.warning("Skipped notes.txt");
//! ```

use std::io::{self, IsTerminal};

use crate::config::Config;
use crate::merge::FileRecord;
use crate::utils::{display_name, format_size};

/// Width of the separator line around the verbose file table.
const RULE_WIDTH: usize = 80;

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
    /// Only shown in verbose mode.
    Debug,
}

impl MessageLevel {
    fn prefix(self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "✓ ",
            Self::Warning => "⚠ ",
            Self::Error => "✗ ",
            Self::Debug => "→ ",
        }
    }

    fn color_code(self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "\x1b[32m", // Green
            Self::Warning => "\x1b[33m", // Yellow
            Self::Error => "\x1b[31m",   // Red
            Self::Debug => "\x1b[36m",   // Cyan
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }
}

/// Output formatter with configurable verbosity.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    quiet: bool,
    verbose: bool,
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: io::stdout().is_terminal() && std::env::var("TERM").is_ok(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.quiet, config.verbose)
    }

    /// Formatter that only reports warnings and errors.
    pub fn quiet() -> Self {
        Self::new(true, false)
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Info, message);
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Success, message);
        }
    }

    /// Print a warning. Always displayed, even in quiet mode.
    pub fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, message);
    }

    /// Print an error. Always displayed.
    pub fn error(&self, message: &str) {
        self.print_message(MessageLevel::Error, message);
    }

    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.print_message(MessageLevel::Debug, message);
        }
    }

    fn print_message(&self, level: MessageLevel, message: &str) {
        let line = render_message(level, message, self.colored);
        if level.to_stderr() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    /// Print a section header, preceded by a blank line.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!("\n{title}");
        }
    }

    /// Print an indented `label: value` line.
    pub fn detail(&self, label: &str, value: &str) {
        if !self.quiet {
            println!("  {label}: {value}");
        }
    }

    /// Print the per-file validation table.
    ///
    /// Only shown in verbose mode.
    pub fn file_table(&self, records: &[FileRecord]) {
        if !self.verbose {
            return;
        }

        println!("\nFiles:");
        println!("{}", "-".repeat(RULE_WIDTH));
        for (idx, record) in records.iter().enumerate() {
            println!("{}", render_record_row(idx + 1, record));
        }
        println!("{}", "-".repeat(RULE_WIDTH));
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

/// One message line, optionally wrapped in ANSI colour codes.
pub fn render_message(level: MessageLevel, message: &str, colored: bool) -> String {
    let prefix = level.prefix();
    let color_code = level.color_code();

    if colored && !color_code.is_empty() {
        format!("{color_code}{prefix}{message}\x1b[0m")
    } else {
        format!("{prefix}{message}")
    }
}

/// One row of the verbose file table: status, index, file name, size, then pages or error.
pub fn render_record_row(index: usize, record: &FileRecord) -> String {
    let status = if record.is_valid() { "✓" } else { "✗" };
    let detail = match record.error() {
        None => format!("{} pages", record.page_count()),
        Some(error) => error.to_string(),
    };

    format!(
        "{status} {index:2}. {:40} {:>10} {detail}",
        display_name(record.path()),
        format_size(record.size_bytes())
    )
}
