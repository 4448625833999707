// src/core/net.rs

// One bounded HTTP GET (blocking reqwest)

use std::time::{Duration, Instant};

use reqwest::blocking::Client;

use crate::config::options::ScrapeOptions;
use crate::error::NetworkFailure;

/// Where page text comes from. The pipeline only ever asks for one URL.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, NetworkFailure>;
}

/// Live fetcher: fixed user agent, fixed timeout, non-2xx is a failure.
pub struct HttpFetcher {
    user_agent: String,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self { user_agent: user_agent.into(), timeout }
    }

    pub fn from_options(opts: &ScrapeOptions) -> Self {
        Self::new(opts.user_agent.clone(), opts.timeout)
    }

    #[cfg(test)]
    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, NetworkFailure> {
        http_get(url, &self.user_agent, self.timeout)
    }
}

pub fn http_get(url: &str, user_agent: &str, timeout: Duration) -> Result<String, NetworkFailure> {
    let t = Instant::now();
    logd!("Net: GET {url}");

    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .map_err(|e| NetworkFailure::new(url, e))?;

    let body = client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(|e| {
            loge!("Net: GET {url} failed: {e}");
            NetworkFailure::new(url, e)
        })?;

    logf!("Net: GET {url} → {} bytes in {:?}", body.len(), t.elapsed());
    Ok(body)
}
