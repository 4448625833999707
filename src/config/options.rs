// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub format: OutputFormat,
}

/// Everything one pipeline run needs. Built from the defaults in `consts`,
/// then overridden by the CLI flags or the GUI form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    pub db_path: PathBuf,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_URL),
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl ScrapeOptions {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_db_path(mut self, path: impl AsRef<Path>) -> Self {
        self.db_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the URL from GUI text. Blank input restores the default target.
    pub fn set_url(&mut self, text: &str) {
        let s = text.trim();
        self.url = if s.is_empty() { s!(DEFAULT_URL) } else { s!(s) };
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn delim(&self) -> char {
        match self { OutputFormat::Csv => ',', OutputFormat::Tsv => '\t' }
    }
}
