//! Terminal progress bar for merge progress events.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::merge::ProgressSink;
//! use pdfmerge::output::ProgressBar;
//!
//! let mut progress = ProgressBar::new();
//! progress.report(0, 10, "processing a.pdf");
//! progress.report(10, 10, "done");
//! ```

use std::io::{self, Write};

use crate::merge::ProgressSink;
use crate::utils::percent;

/// Width of the bar between the brackets.
const BAR_WIDTH: usize = 40;

/// Single-line progress bar, redrawn in place on stdout.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    enabled: bool,
}

impl ProgressBar {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// A progress bar that prints nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ProgressBar {
    fn report(&mut self, current: usize, total: usize, message: &str) {
        if !self.enabled {
            return;
        }

        print!("\r\x1b[K{}", render_line(current, total, message));
        if current >= total && message == "done" {
            println!();
        }
        io::stdout().flush().ok();
    }
}

/// Render one progress line: `[====>     ]  45.0% - message`.
///
/// With an undefined percentage (`total == 0`) only the message is shown.
pub fn render_line(current: usize, total: usize, message: &str) -> String {
    let Some(percent) = percent(current, total) else {
        return message.to_string();
    };

    let filled = (BAR_WIDTH * current.min(total)) / total;
    let bar = if filled >= BAR_WIDTH {
        "=".repeat(BAR_WIDTH)
    } else if filled == 0 {
        " ".repeat(BAR_WIDTH)
    } else {
        format!("{}>{}", "=".repeat(filled - 1), " ".repeat(BAR_WIDTH - filled))
    };

    format!("[{bar}] {percent:5.1}% - {message}")
}
