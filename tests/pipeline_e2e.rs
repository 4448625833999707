// tests/pipeline_e2e.rs
mod common;

use contact_scrape::{
    Contact, ContactStore, Pipeline,
    progress::RecordingProgress,
    store,
};

use common::*;

fn directory_page() -> String {
    page(&[
        block("Alice", "Lecturer", "alice@example.edu", "1234"),
        block("Bob", "Professor", "bob@example.edu", "2000"),
        block("Alice", "Lecturer", "alice@example.edu", "1234"), // listed twice
        block("Carol", "Assistant", "carol@example.edu", "3000"),
    ])
}

#[test]
fn run_returns_contacts_in_page_order() {
    let dir = tmp_dir("order");
    let pipeline = Pipeline::with_fetcher(options_in(&dir), StaticPage::new(directory_page()));

    let out = pipeline.run_default(None);
    let names: Vec<&str> = out.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob", "Alice", "Carol"]);
    assert_eq!(out[1], Contact::new("Bob", "Professor", "bob@example.edu", "2000"));
}

#[test]
fn second_run_adds_no_rows_but_returns_everything() {
    let dir = tmp_dir("twice");
    let opts = options_in(&dir);
    let pipeline = Pipeline::with_fetcher(opts.clone(), StaticPage::new(directory_page()));

    let first = pipeline.run_default(None);
    let after_first = ContactStore::open_ready(&opts.db_path).unwrap().count().unwrap();
    assert_eq!(after_first, 3); // distinct (name, email) pairs

    let second = pipeline.run_default(None);
    let after_second = ContactStore::open_ready(&opts.db_path).unwrap().count().unwrap();
    assert_eq!(after_second, 3);
    assert_eq!(first, second);
    assert_eq!(second.len(), 4);
}

#[test]
fn stored_rows_keep_first_seen_order() {
    let dir = tmp_dir("stored");
    let opts = options_in(&dir);
    Pipeline::with_fetcher(opts.clone(), StaticPage::new(directory_page())).run_default(None);

    let recs = store::load_contacts(&opts.db_path).unwrap();
    let names: Vec<&str> = recs.iter().map(|r| r.contact.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);
}

#[test]
fn timeout_reports_once_and_writes_nothing() {
    let dir = tmp_dir("timeout");
    let opts = options_in(&dir);
    let pipeline = Pipeline::with_fetcher(opts.clone(), TimedOut);

    let mut prog = RecordingProgress::default();
    let out = pipeline.run("http://directory.test/slow.php", Some(&mut prog));

    assert!(out.is_empty());
    assert_eq!(prog.failures.len(), 1);
    assert_eq!(prog.failures[0].url, "http://directory.test/slow.php");
    assert_eq!(prog.finished, Some(0));

    // Store never opened, so not even the file exists.
    assert!(!opts.db_path.exists());
}

#[test]
fn failed_fetch_leaves_existing_rows_alone() {
    let dir = tmp_dir("isolation");
    let opts = options_in(&dir);
    Pipeline::with_fetcher(opts.clone(), StaticPage::new(directory_page())).run_default(None);

    let out = Pipeline::with_fetcher(opts.clone(), TimedOut).run_default(None);
    assert!(out.is_empty());
    assert_eq!(ContactStore::open_ready(&opts.db_path).unwrap().count().unwrap(), 3);
}

#[test]
fn unusable_store_does_not_change_results() {
    let dir = tmp_dir("badstore");
    // A directory where the database file should be: open fails.
    let opts = options_in(&dir).with_db_path(&dir);
    let pipeline = Pipeline::with_fetcher(opts, StaticPage::new(directory_page()));

    let mut prog = RecordingProgress::default();
    let out = pipeline.run_default(Some(&mut prog));
    assert_eq!(out.len(), 4);
    assert!(prog.failures.is_empty());
    assert_eq!(prog.finished, Some(4));
}

#[test]
fn page_without_contacts_is_not_an_error() {
    let dir = tmp_dir("empty");
    let opts = options_in(&dir);
    let fetcher = StaticPage::new("<html><body>Directory moved.</body></html>");
    let pipeline = Pipeline::with_fetcher(opts.clone(), fetcher);

    let mut prog = RecordingProgress::default();
    assert!(pipeline.run_default(Some(&mut prog)).is_empty());
    assert!(prog.failures.is_empty());
    assert_eq!(prog.finished, Some(0));
}

#[test]
fn run_uses_the_url_it_is_given() {
    let dir = tmp_dir("url");
    let pipeline = Pipeline::with_fetcher(options_in(&dir), TimedOut);
    let mut prog = RecordingProgress::default();
    pipeline.run_default(Some(&mut prog));
    assert_eq!(prog.failures[0].url, pipeline.options().url);
}
