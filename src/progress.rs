// src/progress.rs
/// Progress reporting for multi-page lookups (directory discovery walks one page per room).
/// Callers implement this to surface status; the library never prints.
pub trait Progress {
    /// Called at the start with the number of pages to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one room's page has been resolved.
    fn item_done(&mut self, _room: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
