//! Stateless HTTP request builder and response parser for the recipe API.
//!
//! # Design
//! `RecipeClient` holds only a `base_url`. Each endpoint is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Query values are percent-encoded, since
//! search text and ids are free-form strings.

use urlencoding::encode;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreatedRecipe, Recipe, RecipeSummary};

#[derive(Debug, Clone)]
pub struct RecipeClient {
    base_url: String,
}

impl RecipeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn recipe_url(&self, param: &str, value: &str) -> String {
        format!("{}/recipe?{param}={}", self.base_url, encode(value))
    }

    pub fn build_create_recipe(&self, input: &Recipe) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/recipe", self.base_url),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_search_recipes(&self, text: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.recipe_url("search", text),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_recipe(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.recipe_url("id", id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_update_recipe(&self, id: &str, input: &Recipe) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.recipe_url("id", id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_recipe(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.recipe_url("id", id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list_recipes(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/recipes", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_create_recipe(&self, response: HttpResponse) -> Result<CreatedRecipe, ApiError> {
        check_status(&response, 201)?;
        from_json(&response.body)
    }

    pub fn parse_search_recipes(&self, response: HttpResponse) -> Result<Vec<RecipeSummary>, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_get_recipe(&self, response: HttpResponse) -> Result<Recipe, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_update_recipe(&self, response: HttpResponse) -> Result<Recipe, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_delete_recipe(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)
    }

    pub fn parse_list_recipes(&self, response: HttpResponse) -> Result<Vec<RecipeSummary>, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(input: &Recipe) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
