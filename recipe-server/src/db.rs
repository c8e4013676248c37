//! Connection pool setup and schema initialization.

use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

/// Open a pool against `database_url`, creating the database file if needed.
///
/// An in-memory database lives only as long as its connection, so it is
/// pinned to a single connection that never expires.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?
    };

    Ok(pool)
}

/// Ensure the recipe tables exist. Existing data is left untouched.
pub async fn prepare(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS recipes (
            id TEXT PRIMARY KEY,
            name TEXT,
            difficulty INTEGER,
            procedure TEXT,
            image TEXT
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE TABLE IF NOT EXISTS ingredients (name TEXT PRIMARY KEY)")
        .execute(pool)
        .await?;

    // many to many
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS recipes_ingredients (
            ingredient TEXT NOT NULL REFERENCES ingredients(name),
            recipeID TEXT NOT NULL REFERENCES recipes(id),
            PRIMARY KEY (ingredient, recipeID)
        )
        ",
    )
    .execute(pool)
    .await?;

    tracing::info!("recipe schema ready");
    Ok(())
}
