//! Recipe repository over the `recipes`, `ingredients` and
//! `recipes_ingredients` tables.
//!
//! # Design
//! Every multi-statement write runs inside one transaction, so a failure
//! part-way leaves no partial rows behind. Ingredients are created lazily on
//! first reference and never removed, even once no recipe points at them.

use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::error::AppResult;
use crate::model::{Recipe, RecipeSummary};

/// Shared handle to the recipe tables. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    pool: SqlitePool,
}

impl RecipeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a recipe and its ingredient links, returning the new identifier.
    pub async fn create(&self, recipe: &Recipe) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO recipes (id, name, difficulty, procedure, image) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&id)
        .bind(&recipe.name)
        .bind(recipe.difficulty)
        .bind(&recipe.procedure)
        .bind(&recipe.image)
        .execute(&mut *tx)
        .await?;

        link_ingredients(&mut *tx, &id, &recipe.ingredients).await?;
        tx.commit().await?;

        tracing::debug!(%id, ingredients = recipe.ingredients.len(), "recipe created");
        Ok(id)
    }

    /// Overwrite a recipe and replace its ingredient links wholesale.
    ///
    /// Returns `false` without writing anything if `id` does not exist.
    pub async fn update(&self, id: &str, recipe: &Recipe) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE recipes SET name = ?1, difficulty = ?2, procedure = ?3, image = ?4 WHERE id = ?5",
        )
        .bind(&recipe.name)
        .bind(recipe.difficulty)
        .bind(&recipe.procedure)
        .bind(&recipe.image)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            return Ok(false);
        }

        sqlx::query("DELETE FROM recipes_ingredients WHERE recipeID = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        link_ingredients(&mut *tx, id, &recipe.ingredients).await?;
        tx.commit().await?;

        tracing::debug!(%id, ingredients = recipe.ingredients.len(), "recipe updated");
        Ok(true)
    }

    /// Remove a recipe and its links. Deleting an unknown id is a no-op.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM recipes_ingredients WHERE recipeID = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let removed = sqlx::query("DELETE FROM recipes WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        tracing::debug!(%id, removed, "recipe deleted");
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Recipe>> {
        let row: Option<(String, i64, String, String)> = sqlx::query_as(
            "SELECT name, difficulty, procedure, image FROM recipes WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some((name, difficulty, procedure, image)) = row else {
            return Ok(None);
        };

        let ingredients: Vec<String> = sqlx::query_scalar(
            "SELECT ingredient FROM recipes_ingredients WHERE recipeID = ?1 ORDER BY rowid",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Recipe {
            name,
            difficulty,
            ingredients,
            procedure,
            image,
        }))
    }

    /// Summaries of every recipe whose name contains `text`.
    ///
    /// Matching uses SQLite `LIKE`, so it is case-insensitive for ASCII and
    /// `%`/`_` in `text` act as wildcards.
    pub async fn search(&self, text: &str) -> AppResult<Vec<RecipeSummary>> {
        let recipes = sqlx::query_as::<_, RecipeSummary>(
            "SELECT id, name, difficulty, procedure, image FROM recipes WHERE name LIKE '%' || ?1 || '%'",
        )
        .bind(text)
        .fetch_all(&self.pool)
        .await?;
        Ok(recipes)
    }

    pub async fn all(&self) -> AppResult<Vec<RecipeSummary>> {
        let recipes = sqlx::query_as::<_, RecipeSummary>(
            "SELECT id, name, difficulty, procedure, image FROM recipes",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(recipes)
    }
}

/// Upsert each ingredient and link it to `recipe_id`. Repeated names in one
/// recipe collapse into a single link.
async fn link_ingredients(
    conn: &mut SqliteConnection,
    recipe_id: &str,
    ingredients: &[String],
) -> Result<(), sqlx::Error> {
    for ingredient in ingredients {
        sqlx::query("INSERT INTO ingredients (name) VALUES (?1) ON CONFLICT DO NOTHING")
            .bind(ingredient)
            .execute(&mut *conn)
            .await?;

        sqlx::query(
            "INSERT INTO recipes_ingredients (ingredient, recipeID) VALUES (?1, ?2) ON CONFLICT DO NOTHING",
        )
        .bind(ingredient)
        .bind(recipe_id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
