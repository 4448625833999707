// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use contact_scrape::{
    NetworkFailure,
    config::options::ScrapeOptions,
    core::net::Fetch,
};

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("contact_e2e_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn options_in(dir: &PathBuf) -> ScrapeOptions {
    ScrapeOptions::default()
        .with_url("http://directory.test/staff.php")
        .with_db_path(dir.join("contacts.db"))
}

/// Serves the same page text for every URL.
pub struct StaticPage(pub String);

impl StaticPage {
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }
}

impl Fetch for StaticPage {
    fn fetch(&self, _url: &str) -> Result<String, NetworkFailure> {
        Ok(self.0.clone())
    }
}

/// Always times out.
pub struct TimedOut;

impl Fetch for TimedOut {
    fn fetch(&self, url: &str) -> Result<String, NetworkFailure> {
        Err(NetworkFailure::new(url, "operation timed out"))
    }
}

/// One contact block shaped like the live directory markup.
pub fn block(name: &str, title: &str, email: &str, ext: &str) -> String {
    format!(
        r#"
<div class="staff">
  <a href="/p/404-1031-1.php"><img src="/var/file/p.jpg" alt="{name}"></a>
  <table>
    <tr><td>職　　稱：</td>
        <td>{title}</td></tr>
    <tr><td>電子郵件 :</td><td><a href="mailto:{email}">{email}</a></td></tr>
    <tr><td>聯絡電話 :</td><td>(04)2392-4505 #{ext}</td></tr>
  </table>
</div>
"#
    )
}

pub fn page(blocks: &[String]) -> String {
    let mut doc = String::from("<html><body>\n");
    for b in blocks {
        doc.push_str(b);
    }
    doc.push_str("</body></html>\n");
    doc
}
