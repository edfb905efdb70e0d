use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

pub type ConnectionPool = PgPool;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(database_url: &str) -> Result<ConnectionPool, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        info!("Connected to Postgres");

        Ok(pool)
    }
}
