use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use uuid::Uuid;

const SCHEMA: &str = include_str!("../../schema.sql");

/// A throwaway Postgres schema holding the HR tables. The schema is dropped
/// when the value is dropped, including when a test panics.
pub struct TestDb {
    pub pool: PgPool,
    base: PgConnectOptions,
    schema: String,
}

impl TestDb {
    pub async fn new() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let base = PgConnectOptions::from_str(&url).expect("invalid DATABASE_URL");
        let schema = format!("hr_test_{}", Uuid::new_v4().simple());

        let mut admin = PgConnection::connect_with(&base)
            .await
            .expect("admin connection failed");
        admin
            .execute(format!("CREATE SCHEMA {}", schema).as_str())
            .await
            .expect("create schema failed");
        admin.close().await.expect("admin close failed");

        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect_with(base.clone().options([("search_path", schema.as_str())]))
            .await
            .expect("pool creation failed");
        pool.execute(SCHEMA).await.expect("schema setup failed");

        TestDb { pool, base, schema }
    }

    pub async fn teardown(self) {
        self.pool.close().await;
    }
}

impl Drop for TestDb {
    // Drop cannot await, and the test's runtime may be unwinding, so the
    // schema is dropped from a separate thread with its own runtime.
    fn drop(&mut self) {
        let base = self.base.clone();
        let sql = format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema);
        let dropped = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("cleanup runtime");
            runtime.block_on(async move {
                let mut conn = PgConnection::connect_with(&base).await?;
                // A panicked test may leave a pooled connection inside a
                // transaction; give up rather than hang on its locks.
                conn.execute("SET lock_timeout = '5s'").await?;
                conn.execute(sql.as_str()).await?;
                conn.close().await
            })
        })
        .join();

        if !matches!(dropped, Ok(Ok(()))) {
            eprintln!("failed to drop test schema {}", self.schema);
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
