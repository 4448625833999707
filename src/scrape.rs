// src/scrape.rs
use std::time::Instant;

use crate::{
    config::options::ScrapeOptions,
    core::net::{Fetch, HttpFetcher},
    progress::Progress,
    specs::contacts::{self, Contact},
    store::{ContactStore, Upsert},
};

/// Fetch → extract → persist, on the calling thread.
///
/// Built once with its options; nothing here reads process-wide defaults.
pub struct Pipeline<F: Fetch = HttpFetcher> {
    opts: ScrapeOptions,
    fetcher: F,
}

/// What happened to the persisted side of one run. Logged, never shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PersistSummary {
    pub inserted: usize,
    pub already_present: usize,
    pub failed: usize,
}

impl Pipeline<HttpFetcher> {
    pub fn new(opts: ScrapeOptions) -> Self {
        let fetcher = HttpFetcher::from_options(&opts);
        Self { opts, fetcher }
    }
}

impl<F: Fetch> Pipeline<F> {
    pub fn with_fetcher(opts: ScrapeOptions, fetcher: F) -> Self {
        Self { opts, fetcher }
    }

    pub fn options(&self) -> &ScrapeOptions {
        &self.opts
    }

    /// Run against the configured URL.
    pub fn run_default(&self, progress: Option<&mut dyn Progress>) -> Vec<Contact> {
        self.run(&self.opts.url, progress)
    }

    /// Scrape `url` and return every contact found, in page order, whether or
    /// not it was already stored. A failed fetch goes to `progress` and yields
    /// an empty list; store errors are logged and otherwise ignored.
    pub fn run(&self, url: &str, mut progress: Option<&mut dyn Progress>) -> Vec<Contact> {
        let t = Instant::now();
        logf!("Scrape: Begin url={url}");

        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {url}…"));
        }

        let raw = match self.fetcher.fetch(url) {
            Ok(raw) => raw,
            Err(failure) => {
                loge!("Scrape: {failure}");
                if let Some(p) = progress.as_deref_mut() {
                    p.fetch_failed(&failure);
                    p.finish(0);
                }
                return Vec::new();
            }
        };

        let found = contacts::extract(&raw);
        logf!("Scrape: Extracted {} contact(s)", found.len());

        if !found.is_empty() {
            let summary = self.persist(&found);
            logf!(
                "Scrape: Stored new={} known={} failed={}",
                summary.inserted,
                summary.already_present,
                summary.failed
            );
        }

        logf!("Scrape: Done in {:?}", t.elapsed());
        if let Some(p) = progress.as_deref_mut() {
            p.finish(found.len());
        }
        found
    }

    /// Best-effort: the store is opened for this batch only and dropped on return.
    fn persist(&self, found: &[Contact]) -> PersistSummary {
        let mut summary = PersistSummary::default();

        let store = match ContactStore::open_ready(&self.opts.db_path) {
            Ok(s) => s,
            Err(e) => {
                loge!("Store: open {} failed: {e}", self.opts.db_path.display());
                summary.failed = found.len();
                return summary;
            }
        };

        for c in found {
            match store.upsert_if_new(c) {
                Ok(Upsert::Inserted(_)) => summary.inserted += 1,
                Ok(Upsert::AlreadyPresent(_)) => summary.already_present += 1,
                Err(e) => {
                    // TODO: decide whether a failing write should reach the status line
                    loge!("Store: write failed for {}, {}: {e}", c.name, c.email);
                    summary.failed += 1;
                }
            }
        }
        summary
    }
}
