// src/gui/progress.rs
use crate::{error::NetworkFailure, progress::Progress};

/// Writes straight into the App fields. The run happens on the UI thread,
/// so plain borrows are enough.
pub struct GuiProgress<'a> {
    status: &'a mut String,
    failure: &'a mut Option<NetworkFailure>,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut String, failure: &'a mut Option<NetworkFailure>) -> Self {
        Self { status, failure }
    }
}

impl Progress for GuiProgress<'_> {
    fn log(&mut self, msg: &str) {
        *self.status = s!(msg);
    }
    fn fetch_failed(&mut self, failure: &NetworkFailure) {
        *self.status = format!("Error: {failure}");
        *self.failure = Some(failure.clone());
    }
    fn finish(&mut self, found: usize) {
        if self.failure.is_none() {
            *self.status = format!("Found {found} contact(s)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_sticks_in_status() {
        let mut status = s!("Idle");
        let mut failure = None;
        {
            let mut p = GuiProgress::new(&mut status, &mut failure);
            p.log("Fetching…");
            p.fetch_failed(&NetworkFailure::new("http://x.test", "timed out"));
            p.finish(0);
        }
        assert_eq!(status, "Error: Unable to reach http://x.test: timed out");
        assert_eq!(failure.unwrap().url, "http://x.test");
    }

    #[test]
    fn finish_reports_count() {
        let mut status = s!();
        let mut failure = None;
        GuiProgress::new(&mut status, &mut failure).finish(3);
        assert_eq!(status, "Found 3 contact(s)");
    }
}
