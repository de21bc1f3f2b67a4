/// Receiver for merge progress events.
///
/// Called synchronously on the merging thread with the pages processed so far, the session
/// total and a short status message. A `total` of zero means the percentage is undefined.
pub trait ProgressSink {
    fn report(&mut self, current: usize, total: usize, message: &str);
}

impl<F> ProgressSink for F
where
    F: FnMut(usize, usize, &str),
{
    fn report(&mut self, current: usize, total: usize, message: &str) {
        self(current, total, message)
    }
}

/// Discards every progress event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _current: usize, _total: usize, _message: &str) {}
}
