//! Wire and storage shapes for recipes.
//!
//! # Design
//! `Recipe` is the nested representation accepted on writes and returned by
//! point lookups; it carries no identifier. `RecipeSummary` is the projection
//! used by list and search results, with the identifier but no ingredients.
//! Missing JSON fields decode to zero values; nothing else is validated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub name: String,
    pub difficulty: i64,
    pub ingredients: Vec<String>,
    pub procedure: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub difficulty: i64,
    pub procedure: String,
    pub image: String,
}

/// Body returned by a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedRecipe {
    pub message: String,
    pub id: String,
    pub recipe: Recipe,
}
