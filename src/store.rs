// src/store.rs
//
// Persistent contact table (SQLite).
//
// Dedup is a procedural check on (name, email) before each insert, not a
// UNIQUE constraint. That is only sound with a single writer, which is how
// this app runs. Multiple writers would need the check and insert inside one
// transaction, or UNIQUE(name, email) with INSERT OR IGNORE.

use std::{fs, path::Path};

use rusqlite::{Connection, OptionalExtension, params};

use crate::error::StoreError;
use crate::specs::contacts::Contact;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    title TEXT NOT NULL,
    email TEXT NOT NULL,
    extension TEXT NOT NULL
)"#;

const SELECT_BY_KEY: &str = "SELECT id FROM contacts WHERE name = ?1 AND email = ?2";

const INSERT: &str =
    "INSERT INTO contacts (name, title, email, extension) VALUES (?1, ?2, ?3, ?4)";

/// A persisted contact with its store-assigned id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRecord {
    pub id: i64,
    pub contact: Contact,
}

/// Outcome of `upsert_if_new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    Inserted(i64),
    AlreadyPresent(i64),
}

/// One open database file. Opened per pipeline run and closed on drop.
pub struct ContactStore {
    conn: Connection,
}

impl ContactStore {
    /// Open (or create) the database file. Parent directories are created.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        logd!("Store: opened {}", path.display());
        Ok(Self { conn })
    }

    /// Open and make sure the table exists.
    pub fn open_ready(path: &Path) -> Result<Self, StoreError> {
        let store = Self::open(path)?;
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        self.conn.execute(CREATE_TABLE, [])?;
        Ok(())
    }

    /// Insert unless a row with the same (name, email) already exists.
    pub fn upsert_if_new(&self, c: &Contact) -> Result<Upsert, StoreError> {
        let existing: Option<i64> = self
            .conn
            .query_row(SELECT_BY_KEY, params![c.name, c.email], |row| row.get(0))
            .optional()?;

        if let Some(id) = existing {
            logf!("Store: already present: {}, {}", c.name, c.email);
            return Ok(Upsert::AlreadyPresent(id));
        }

        self.conn
            .execute(INSERT, params![c.name, c.title, c.email, c.extension])?;
        let id = self.conn.last_insert_rowid();
        logd!("Store: inserted #{id}: {}, {}", c.name, c.email);
        Ok(Upsert::Inserted(id))
    }

    /// All rows, oldest first.
    pub fn records(&self) -> Result<Vec<ContactRecord>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, title, email, extension FROM contacts ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ContactRecord {
                    id: row.get(0)?,
                    contact: Contact {
                        name: row.get(1)?,
                        title: row.get(2)?,
                        email: row.get(3)?,
                        extension: row.get(4)?,
                    },
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(n as usize)
    }
}

/// Read every persisted contact from `path`, for display at startup or `--list`.
pub fn load_contacts(path: &Path) -> Result<Vec<ContactRecord>, StoreError> {
    ContactStore::open_ready(path)?.records()
}
