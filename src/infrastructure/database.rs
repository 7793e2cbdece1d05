use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    // every connection to an in-memory database opens a fresh one
    let in_memory = database_url.contains(":memory:");
    let mut options = SqlitePoolOptions::new().max_connections(if in_memory { 1 } else { 16 });
    if in_memory {
        options = options.idle_timeout(None).max_lifetime(None);
    }

    let pool = options.connect(database_url).await?;

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
