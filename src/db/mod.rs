use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DbConfig;

/// Connects the shared pool. Every operation checks a connection out for the
/// duration of one statement and returns it on drop.
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    log::info!(
        "Connecting to database {} at {}:{} (max {} connections)",
        config.dbname,
        config.host,
        config.port,
        config.max_connections
    );
    pool_options(config)
        .connect_with(config.connect_options())
        .await
}

/// Builds the pool without opening a connection; the first query connects.
pub fn create_lazy_pool(config: &DbConfig) -> PgPool {
    pool_options(config).connect_lazy_with(config.connect_options())
}

fn pool_options(config: &DbConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
}
