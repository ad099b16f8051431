use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{SqlitePool, SqlitePoolOptions},
    Row, Sqlite,
};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, info};
use crate::errors::Result;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:gem_cache.db";

const CREATE_DOCUMENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS documents (
        key TEXT PRIMARY KEY NOT NULL,
        body TEXT NOT NULL,
        fetched_at INTEGER NOT NULL
    )
"#;

/// Raw source documents keyed by name, with the time they were fetched.
pub struct DocumentCache {
    pool: SqlitePool,
}

impl DocumentCache {
    pub async fn initialize(database_url: &str) -> Result<Self> {
        if !Sqlite::database_exists(database_url).await? {
            info!(database_url, "creating document cache");
            Sqlite::create_database(database_url).await?;
        }

        let pool = SqlitePool::connect(database_url).await?;
        Self::with_pool(pool).await
    }

    /// Single-connection in-memory cache; every connection to
    /// `sqlite::memory:` would otherwise see its own empty database.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(CREATE_DOCUMENTS).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Body stored under `key` if it is younger than `max_age`.
    pub async fn get_fresh(&self, key: &str, max_age: Duration) -> Result<Option<String>> {
        let row = sqlx::query("SELECT body, fetched_at FROM documents WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let fetched_at: i64 = row.try_get("fetched_at")?;
        let age = now_secs().saturating_sub(fetched_at);
        if age < 0 || age as u64 >= max_age.as_secs() {
            debug!(key, age, "cached document is stale");
            return Ok(None);
        }
        Ok(Some(row.try_get("body")?))
    }

    pub async fn store(&self, key: &str, body: &str) -> Result<()> {
        self.store_at(key, body, now_secs()).await
    }

    async fn store_at(&self, key: &str, body: &str, fetched_at: i64) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO documents (key, body, fetched_at) VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET body = excluded.body, fetched_at = excluded.fetched_at
            "#,
        )
        .bind(key)
        .bind(body)
        .bind(fetched_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_and_read_back() {
        let cache = DocumentCache::in_memory().await.unwrap();
        assert_eq!(cache.get_fresh("gem_prices", Duration::from_secs(60)).await.unwrap(), None);

        cache.store("gem_prices", "{\"lines\": []}").await.unwrap();
        let body = cache.get_fresh("gem_prices", Duration::from_secs(60)).await.unwrap();
        assert_eq!(body.as_deref(), Some("{\"lines\": []}"));

        cache.store("gem_prices", "{\"lines\": [1]}").await.unwrap();
        let body = cache.get_fresh("gem_prices", Duration::from_secs(60)).await.unwrap();
        assert_eq!(body.as_deref(), Some("{\"lines\": [1]}"));
    }

    #[tokio::test]
    async fn test_stale_documents_are_ignored() {
        let cache = DocumentCache::in_memory().await.unwrap();
        cache.store_at("quality_table", "<html/>", now_secs() - 7200).await.unwrap();

        let hour = Duration::from_secs(3600);
        assert_eq!(cache.get_fresh("quality_table", hour).await.unwrap(), None);
        let day = Duration::from_secs(86400);
        assert_eq!(cache.get_fresh("quality_table", day).await.unwrap().as_deref(), Some("<html/>"));
    }
}
