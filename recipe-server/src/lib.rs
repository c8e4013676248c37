//! HTTP service for recipes backed by SQLite.
//!
//! A recipe (name, difficulty, procedure, image, ingredient names) is stored
//! across `recipes`, `ingredients` and the `recipes_ingredients` link table.
//! All requests share one connection pool; there is no other shared state.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod routes;
pub mod store;

use axum::Router;
use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use error::{AppError, AppResult};
pub use model::{CreatedRecipe, Recipe, RecipeSummary};
pub use store::RecipeStore;

pub fn app(store: RecipeStore) -> Router {
    routes::router(store)
}

/// Connect to `database_url` and make sure the schema exists.
pub async fn open_store(database_url: &str, max_connections: u32) -> Result<RecipeStore, sqlx::Error> {
    let pool = db::connect(database_url, max_connections).await?;
    db::prepare(&pool).await?;
    Ok(RecipeStore::new(pool))
}

pub async fn run(listener: TcpListener, store: RecipeStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}
