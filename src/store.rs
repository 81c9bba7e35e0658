//! SQLite-backed entry store
//!
//! An append-only log of user submissions and the advice computed for
//! them. Entries are never updated or deleted by the application.

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::debug;

use crate::types::{Entry, NewEntry};

/// Append-only store of submissions, one row per entry.
pub struct EntryStore {
    conn: Connection,
}

impl EntryStore {
    /// Open (or create) the store at the given path.
    ///
    /// Schema creation is idempotent: existing rows are never dropped or
    /// rewritten. Databases written by the earlier four-column schema are
    /// upgraded in place by adding the missing text columns with empty
    /// defaults.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        Self::init_schema(&conn)?;
        debug!(path = %path.display(), "entry store opened");

        Ok(Self { conn })
    }

    /// In-memory store, used by tests.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS user_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                farmland_size REAL,
                previous_crop TEXT,
                current_crop TEXT,
                soil_type TEXT,
                recommendation TEXT NOT NULL DEFAULT '',
                fertilizer TEXT NOT NULL DEFAULT '',
                techniques TEXT NOT NULL DEFAULT ''
            );
            "#,
        )?;

        Self::upgrade_legacy_schema(conn)?;
        Ok(())
    }

    /// Add the advice columns to databases created by the original
    /// four-column schema. Existing rows read back as empty strings.
    fn upgrade_legacy_schema(conn: &Connection) -> Result<()> {
        let mut stmt = conn.prepare("PRAGMA table_info(user_entries)")?;
        let existing: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<Result<Vec<_>, _>>()?;

        for column in ["recommendation", "fertilizer", "techniques"] {
            if !existing.iter().any(|c| c == column) {
                debug!(column, "adding missing entry column");
                conn.execute(
                    &format!(
                        "ALTER TABLE user_entries ADD COLUMN {} TEXT NOT NULL DEFAULT ''",
                        column
                    ),
                    [],
                )?;
            }
        }

        Ok(())
    }

    /// Insert a new entry and return its assigned id. Durable on return.
    pub fn append(&self, entry: &NewEntry) -> Result<i64> {
        self.conn
            .execute(
                r#"INSERT INTO user_entries
                   (farmland_size, previous_crop, current_crop, soil_type,
                    recommendation, fertilizer, techniques)
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"#,
                params![
                    entry.farmland_size,
                    entry.previous_crop,
                    entry.current_crop,
                    entry.soil_type,
                    entry.recommendation,
                    entry.fertilizer,
                    entry.techniques,
                ],
            )
            .context("Failed to save entry")?;

        Ok(self.conn.last_insert_rowid())
    }

    /// All entries, newest first.
    pub fn list_all(&self) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare_cached(
            r#"SELECT id, farmland_size, previous_crop, current_crop, soil_type,
                      recommendation, fertilizer, techniques
               FROM user_entries
               ORDER BY id DESC"#,
        )?;

        let entries = stmt
            .query_map([], |row| {
                Ok(Entry {
                    id: row.get(0)?,
                    farmland_size: row.get(1)?,
                    previous_crop: row.get(2)?,
                    current_crop: row.get(3)?,
                    soil_type: row.get(4)?,
                    recommendation: row.get(5)?,
                    fertilizer: row.get(6)?,
                    techniques: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Number of stored entries.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM user_entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
