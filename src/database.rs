use anyhow::Context;
use sqlx::{Pool, Sqlite, sqlite::SqlitePool};

#[derive(Clone)]
pub struct Database {
    pub(crate) pool: Pool<Sqlite>,
}

/// Common methods for the primary database, extensions are implemented separately in every module.
impl Database {
    /// Opens database "connection".
    pub async fn open<I: FnOnce() -> anyhow::Result<String>>(
        initializer: I,
    ) -> anyhow::Result<Self> {
        let pool = SqlitePool::connect(&initializer()?)
            .await
            .with_context(|| "Failed to connect to the database")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .with_context(|| "Failed to migrate database")?;

        Ok(Database { pool })
    }
}
