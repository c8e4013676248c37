//! HTTP surface: `/recipe` for single-resource operations dispatched by
//! method and query string, `/recipes` for the full listing.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::error::{AppError, AppResult};
use crate::model::{CreatedRecipe, Recipe};
use crate::store::RecipeStore;

#[derive(Debug, Default, Deserialize)]
pub struct RecipeQuery {
    pub id: Option<String>,
    pub search: Option<String>,
}

impl RecipeQuery {
    /// An empty `id=` counts as absent.
    fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.is_empty())
    }

    fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    fn require_id(&self) -> AppResult<&str> {
        self.id()
            .ok_or_else(|| AppError::BadRequest("missing `id` query parameter".to_string()))
    }
}

pub fn router(store: RecipeStore) -> Router {
    Router::new()
        .route(
            "/recipe",
            get(read_recipe)
                .post(create_recipe)
                .put(update_recipe)
                .delete(delete_recipe),
        )
        .route("/recipes", get(list_recipes))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Permissive CORS for local development.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
}

fn parse_recipe(body: &Bytes) -> AppResult<Recipe> {
    serde_json::from_slice(body).map_err(|e| AppError::InvalidBody(e.to_string()))
}

async fn create_recipe(State(store): State<RecipeStore>, body: Bytes) -> AppResult<Response> {
    let recipe = parse_recipe(&body)?;
    let id = store.create(&recipe).await?;
    tracing::info!(%id, name = %recipe.name, "created recipe");

    let created = CreatedRecipe {
        message: "POST done".to_string(),
        id,
        recipe,
    };
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

async fn read_recipe(
    State(store): State<RecipeStore>,
    Query(query): Query<RecipeQuery>,
) -> AppResult<Response> {
    if let Some(text) = query.search() {
        let results = store.search(text).await?;
        return Ok(Json(results).into_response());
    }

    if let Some(id) = query.id() {
        let recipe = store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        return Ok(Json(recipe).into_response());
    }

    Err(AppError::BadRequest(
        "expected `id` or `search` query parameter".to_string(),
    ))
}

async fn update_recipe(
    State(store): State<RecipeStore>,
    Query(query): Query<RecipeQuery>,
    body: Bytes,
) -> AppResult<Json<Recipe>> {
    let id = query.require_id()?;
    let recipe = parse_recipe(&body)?;

    if !store.update(id, &recipe).await? {
        return Err(AppError::NotFound(id.to_string()));
    }
    tracing::info!(%id, "updated recipe");
    Ok(Json(recipe))
}

async fn delete_recipe(
    State(store): State<RecipeStore>,
    Query(query): Query<RecipeQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let id = query.require_id()?;
    store.delete(id).await?;
    tracing::info!(%id, "deleted recipe");
    Ok(Json(json!({})))
}

async fn list_recipes(State(store): State<RecipeStore>) -> AppResult<Response> {
    let results = store.all().await?;
    Ok(Json(results).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_values_count_as_absent() {
        let query: RecipeQuery = serde_json::from_str(r#"{"id":"","search":""}"#).unwrap();
        assert!(query.id().is_none());
        assert!(query.search().is_none());
        assert!(matches!(query.require_id(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn require_id_returns_value() {
        let query = RecipeQuery {
            id: Some("abc".to_string()),
            search: None,
        };
        assert_eq!(query.require_id().unwrap(), "abc");
    }

    #[test]
    fn parse_recipe_reports_invalid_body() {
        let err = parse_recipe(&Bytes::from_static(b"{not json")).unwrap_err();
        assert!(matches!(err, AppError::InvalidBody(_)));
    }
}
