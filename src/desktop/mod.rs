//! Toolkit-agnostic state behind the desktop window.
//!
//! A widget layer owns a [`DesktopController`] on its UI thread and forwards user actions to
//! it. Merges run on a worker thread, which never touches UI state: it posts [`UiEvent`]s
//! through a [`UiDispatcher`] that the UI thread drains.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::desktop::{DesktopController, UiEvent};
//! use tokio::sync::mpsc;
//!
//! let mut controller = DesktopController::new();
//! controller.add_paths(["file:///home/me/scans/page%201.pdf"]);
//!
//! let (tx, mut rx) = mpsc::unbounded_channel();
//! controller.start_merge(tx).unwrap();
//!
//! // In the UI loop:
//! while let Ok(event) = rx.try_recv() {
//!     if let UiEvent::Progress { percent } = event {
//!         println!("{percent}%");
//!     }
//! }
//! ```

mod browse;
mod controller;
mod worker;

pub use browse::{BrowseEntry, SortOrder, browse};
pub use controller::{AddOutcome, DesktopController, StartRefused};
pub use worker::run_merge;

use tokio::sync::mpsc::UnboundedSender;

/// Notification posted from the merge worker to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Merge progress, 0 to 100.
    Progress { percent: u8 },
    /// The merge succeeded.
    Finished { message: String },
    /// The merge failed.
    Failed { message: String },
    /// The worker is done; merging may be enabled again.
    Idle,
}

/// Posts events to the context that owns the UI.
pub trait UiDispatcher {
    fn dispatch(&self, event: UiEvent);
}

impl UiDispatcher for UnboundedSender<UiEvent> {
    fn dispatch(&self, event: UiEvent) {
        if self.send(event).is_err() {
            log::debug!("UI event channel closed, dropping event");
        }
    }
}
