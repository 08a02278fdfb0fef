use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;
use tracing::info;

use crate::config::DbConfig;

/// Creates and returns a MySQL connection pool.
pub async fn create_pool(db: &DbConfig) -> Result<MySqlPool> {
    info!("Connecting to MySQL at {}:{}/{}...", db.host, db.port, db.name);

    let options = MySqlConnectOptions::new()
        .host(&db.host)
        .port(db.port)
        .username(&db.user)
        .password(&db.password)
        .database(&db.name);

    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
        .context("Failed to connect to MySQL")?;

    info!("MySQL connection pool established");
    Ok(pool)
}
