//! SQLite-backed image metadata store.
//!
//! Holds one row per stored blob: `(id, filename, url)`. The row is the
//! application's view of "this asset exists"; whether the blob is actually
//! on disk is checked at read time by the callers, never here. Rows are
//! inserted after a successful blob write and deleted after a successful
//! blob removal; there is no update path.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use tokio::sync::Mutex;
use tracing::{debug, info};

use pixelvault_core::Asset;

pub struct ImageStore {
    conn: Mutex<Connection>,
}

impl ImageStore {
    /// Open or create the metadata database at the given path.
    ///
    /// The parent directory is created if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(path).context("Failed to open SQLite image database")?;
        Self::init_schema(&conn)?;
        info!(path = %path.display(), "Image metadata store opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory store (for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory SQLite")?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS images (
                id       INTEGER PRIMARY KEY AUTOINCREMENT,
                filename TEXT NOT NULL,
                url      TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_images_filename ON images(filename);",
        )
        .context("Failed to initialize images schema")?;
        Ok(())
    }

    /// Insert a metadata row, returning the assigned id.
    pub async fn insert(&self, filename: &str, url: &str) -> Result<i64> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO images (filename, url) VALUES (?1, ?2)",
            params![filename, url],
        )
        .context("Failed to insert image row")?;
        let id = conn.last_insert_rowid();
        debug!(filename = %filename, id, "Inserted image row");
        Ok(id)
    }

    /// All rows, in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Asset>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT id, filename, url FROM images ORDER BY id ASC")
            .context("Failed to prepare image listing")?;

        let assets = stmt
            .query_map([], |row| {
                Ok(Asset {
                    id: row.get(0)?,
                    filename: row.get(1)?,
                    url: row.get(2)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(assets)
    }

    /// Look up a row by exact filename. Returns the oldest match when
    /// duplicates exist (possible: filename uniqueness is probabilistic,
    /// not enforced).
    pub async fn get_by_filename(&self, filename: &str) -> Result<Option<Asset>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT id, filename, url FROM images WHERE filename = ?1 ORDER BY id ASC LIMIT 1")
            .context("Failed to prepare image lookup")?;

        let mut rows = stmt.query_map(params![filename], |row| {
            Ok(Asset {
                id: row.get(0)?,
                filename: row.get(1)?,
                url: row.get(2)?,
            })
        })?;

        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// Delete every row matching the filename, returning the count removed.
    pub async fn delete_by_filename(&self, filename: &str) -> Result<usize> {
        let conn = self.conn.lock().await;
        let removed = conn
            .execute("DELETE FROM images WHERE filename = ?1", params![filename])
            .context("Failed to delete image rows")?;
        debug!(filename = %filename, removed, "Deleted image rows");
        Ok(removed)
    }

    /// Count all rows in the store.
    pub async fn count(&self) -> Result<usize> {
        let conn = self.conn.lock().await;
        let count: usize = conn.query_row("SELECT COUNT(*) FROM images", [], |row| row.get(0))?;
        Ok(count)
    }
}
