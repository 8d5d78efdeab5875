// src/progress.rs
/// Progress reporting for a scrape run.
/// Frontends implement this to surface per-version status.
pub trait Progress {
    /// Called at the start with the number of versions requested.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A version's spec was extracted.
    fn item_done(&mut self, _version: u32) {}

    /// A version was dropped from the run.
    fn item_failed(&mut self, _version: u32, _reason: &str) {}

    /// Called once all versions have reported.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
