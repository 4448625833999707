// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://landscape.ncut.edu.tw/p/412-1031-6821.php";
pub const USER_AGENT: &str = "Mozilla/5.0"; // site rejects default client identifiers
pub const FETCH_TIMEOUT_SECS: u64 = 10;

// Persistent store
pub const DEFAULT_DB_FILE: &str = "contacts.db";

// Local scratch (debug log)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
