//! Credential store backing the login endpoint.
//!
//! Login verification is a collaborator behind a trait, so deployments can
//! swap the SQLite-backed store for an external identity provider. The
//! shipped implementation keeps a `users` table with sha256-hex password
//! digests.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rusqlite::{params, Connection};
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Verifies a credential pair against some backing identity source.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns `true` when the pair matches a known user.
    async fn verify(&self, email: &str, password: &str) -> Result<bool>;
}

/// SQLite-backed credential store.
pub struct SqliteCredentialStore {
    conn: Mutex<Connection>,
}

impl SqliteCredentialStore {
    /// Open or create the credential database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(path).context("Failed to open SQLite user database")?;
        Self::init_schema(&conn)?;
        info!(path = %path.display(), "Credential store opened");
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
            "CREATE TABLE IF NOT EXISTS users (
                id            INTEGER PRIMARY KEY AUTOINCREMENT,
                email         TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL
            );",
        )
        .context("Failed to initialize users schema")?;
        Ok(())
    }

    /// Insert or replace a user with the given plain-text password.
    pub async fn add_user(&self, email: &str, password: &str) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT OR REPLACE INTO users (email, password_hash) VALUES (?1, ?2)",
            params![email, hash_password(password)],
        )
        .context("Failed to insert user")?;
        info!(email = %email, "Stored user credentials");
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn verify(&self, email: &str, password: &str) -> Result<bool> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT password_hash FROM users WHERE email = ?1")
            .context("Failed to prepare user lookup")?;

        let stored: Option<String> = stmt
            .query_map(params![email], |row| row.get(0))?
            .filter_map(|r| r.ok())
            .next();

        match stored {
            Some(hash) => Ok(hash == hash_password(password)),
            None => {
                warn!(email = %email, "Login attempt for unknown user");
                Ok(false)
            }
        }
    }
}

/// sha256 hex digest of a password.
fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    hex::encode(digest)
}
