// src/progress.rs
use crate::error::NetworkFailure;

/// Status reporting for a pipeline run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// The page could not be fetched. Called at most once per run,
    /// before the run returns its (empty) result.
    fn fetch_failed(&mut self, _failure: &NetworkFailure) {}

    /// Called at the end with the number of contacts returned.
    fn finish(&mut self, _found: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Collects everything it is told. Handy for tests and for the CLI,
/// which reports after the run returns.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
    pub failures: Vec<NetworkFailure>,
    pub finished: Option<usize>,
}

impl Progress for RecordingProgress {
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
    fn fetch_failed(&mut self, failure: &NetworkFailure) {
        self.failures.push(failure.clone());
    }
    fn finish(&mut self, found: usize) {
        self.finished = Some(found);
    }
}
