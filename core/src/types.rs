//! Domain DTOs for the recipe API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined independently,
//! so the client never links against axum or sqlx. Integration tests catch
//! any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A full recipe as sent on writes and returned by a lookup by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub name: String,
    pub difficulty: i64,
    pub ingredients: Vec<String>,
    pub procedure: String,
    pub image: String,
}

/// Summary row returned by search and list; carries the id, not ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub difficulty: i64,
    pub procedure: String,
    pub image: String,
}

/// Acknowledgement for a create, including the server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecipe {
    pub message: String,
    pub id: String,
    pub recipe: Recipe,
}
