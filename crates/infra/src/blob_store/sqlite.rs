//! SQLite-backed blob store for device-local persistence.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use tokio::runtime::Runtime;

use super::r#trait::{BlobStore, BlobStoreError};

/// SQLite-backed blob store: one row per key in a `blobs` table.
///
/// The synchronous [`BlobStore`] API is served from an owned current-thread
/// runtime, so it must not be called from inside another tokio runtime.
#[derive(Debug)]
pub struct SqliteBlobStore {
    // Declared before `rt` so the pool is closed while the runtime still exists.
    pool: SqlitePool,
    rt: Runtime,
    path: PathBuf,
}

impl SqliteBlobStore {
    /// Open (creating if necessary) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create blob store directory at {:?}", parent))?;
        }

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to create runtime for SqliteBlobStore")?;

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        let pool = rt
            .block_on(
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .connect_with(options),
            )
            .with_context(|| format!("failed to open SQLite blob store at {:?}", path))?;

        rt.block_on(
            sqlx::query(
                r#"
                CREATE TABLE IF NOT EXISTS blobs (
                    key        TEXT PRIMARY KEY NOT NULL,
                    value      TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )
                "#,
            )
            .execute(&pool),
        )
        .context("failed to create blobs table")?;

        tracing::debug!(path = %path.display(), "sqlite blob store opened");

        Ok(Self { pool, rt, path })
    }

    /// `{data_dir}/inventory.db`.
    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("inventory.db")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
        let read_err = |e: sqlx::Error| BlobStoreError::Read {
            key: key.to_string(),
            reason: e.to_string(),
        };

        let row = self
            .rt
            .block_on(
                sqlx::query(
                    r#"
                    SELECT value
                    FROM blobs
                    WHERE key = ?1
                    "#,
                )
                .bind(key)
                .fetch_optional(&self.pool),
            )
            .map_err(read_err)?;

        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let value: String = row.try_get("value").map_err(read_err)?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError> {
        let now = Utc::now().to_rfc3339();

        self.rt
            .block_on(
                sqlx::query(
                    r#"
                    INSERT INTO blobs (key, value, updated_at)
                    VALUES (?1, ?2, ?3)
                    ON CONFLICT(key)
                    DO UPDATE SET
                        value = excluded.value,
                        updated_at = excluded.updated_at
                    "#,
                )
                .bind(key)
                .bind(value)
                .bind(&now)
                .execute(&self.pool),
            )
            .map_err(|e| BlobStoreError::Write {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_db() -> PathBuf {
        std::env::temp_dir()
            .join("minibar-tests")
            .join(format!("{}.db", uuid::Uuid::now_v7()))
    }

    #[test]
    fn values_survive_reopen() {
        let path = temp_db();
        {
            let store = SqliteBlobStore::open(&path).unwrap();
            assert_eq!(store.get("items").unwrap(), None);
            store.set("items", "[]").unwrap();
            store.set("items", "[{\"id\":\"water\"}]").unwrap();
        }

        let store = SqliteBlobStore::open(&path).unwrap();
        assert_eq!(
            store.get("items").unwrap().as_deref(),
            Some("[{\"id\":\"water\"}]")
        );
        assert_eq!(store.path(), path.as_path());

        drop(store);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn default_path_lives_in_data_dir() {
        let dir = Path::new("/data/minibar");
        assert_eq!(
            SqliteBlobStore::default_path(dir),
            PathBuf::from("/data/minibar/inventory.db")
        );
    }
}
