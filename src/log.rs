// src/log.rs
use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

/// Install the global subscriber. Lines go to `.store/debug.log`; if that
/// can't be opened we fall back to stderr. Calling twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = fs::create_dir_all(STORE_DIR);
    let path = std::path::Path::new(STORE_DIR).join(LOG_FILE);

    let installed = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        Err(_) => builder.with_writer(std::io::stderr).try_init(),
    };

    if installed.is_ok() {
        logd!("Log: writing to {}", path.display());
    }
}
