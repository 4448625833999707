//! # Scraping “specs” module
//!
//! This module hosts the **page-specific scraping specifications**. A spec
//! encodes *where the ground truth lives in the markup* and *how to pull it
//! out*, without fetching or persisting anything itself.
//!
//! ## What lives here
//! - **Pattern-based extraction** of raw page text. There is no DOM parser:
//!   each spec describes its fields as anchor / value / terminator fragments
//!   that are stitched into one non-greedy, dot-matches-newline pattern.
//! - **Field rules as data** (`contacts::FieldRule`). A markup change on the
//!   site means editing a rule, not the control flow around it, and each rule
//!   can be compiled and tested on its own.
//! - **Light shaping** of matches into small record structs (`Contact`).
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and **persistence** (`store`). The pipeline
//!   in `scrape` wires those around the spec.
//! - **GUI concerns or output formatting.**
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::Pipeline::run → core::net::Fetch::fetch
//!                                  ↘ specs::contacts::extract
//!                                  ↘ store::ContactStore::upsert_if_new
//! ```
//!
//! ## Conventions & invariants
//! - Extraction is a **pure function** of the page text: same input, same
//!   output, same order.
//! - A match missing any field is **dropped, not repaired**. Finding nothing
//!   is not an error.
//! - Duplicates on a page are returned as duplicates; dedup belongs to the store.
//!
//! ## Testing notes
//! - Specs are tested **offline** against small synthetic snippets that follow
//!   the live layout.
pub mod contacts;
