use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::ops::Deref;

pub struct DB {
    pub pool: SqlitePool,
}

impl DB {
    // One pool shared by every handler.
    // An in-memory url gives each connection its own database, so tests open it with a pool size of 1.
    pub async fn new(url: &str, pool_size: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .connect(url)
            .await
            .with_context(|| format!("Cannot connect to database at {}", url))?;
        Ok(DB { pool })
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Cannot migrate database")?;
        Ok(())
    }
}

impl Deref for DB {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}
