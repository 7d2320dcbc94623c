//! axum routes and handlers for the recipe collection.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{info, warn};

use super::error::HandlerError;
use crate::recipe::{Recipe, RecipeInput};
use crate::store::RecipeStore;

/// Build an axum `Router` serving the recipe routes from `store`.
pub fn router<S: RecipeStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/health", get(health_handler::<S>))
        .route(
            "/recipes",
            get(list_handler::<S>).post(create_handler::<S>),
        )
        .route(
            "/recipes/:id",
            get(get_handler::<S>)
                .put(update_handler::<S>)
                .delete(delete_handler::<S>),
        )
        .with_state(store)
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        warn!(status = status.as_u16(), error = %self, "request failed");
        (status, self.to_string()).into_response()
    }
}

impl From<JsonRejection> for HandlerError {
    fn from(rejection: JsonRejection) -> Self {
        HandlerError::DecodeFailed(rejection.body_text())
    }
}

/// `GET /health` - returns `{ "ok": true, "recipes": n }`.
async fn health_handler<S: RecipeStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Value>, HandlerError> {
    let count = store.len()?;
    Ok(Json(json!({ "ok": true, "recipes": count })))
}

/// `GET /recipes`
async fn list_handler<S: RecipeStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<Recipe>>, HandlerError> {
    let recipes = store.list()?;
    info!(count = recipes.len(), "listing recipes");
    Ok(Json(recipes))
}

/// `GET /recipes/:id`
async fn get_handler<S: RecipeStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, HandlerError> {
    Ok(Json(store.get(&id)?))
}

/// `POST /recipes` - `201` with the stored recipe.
async fn create_handler<S: RecipeStore>(
    State(store): State<Arc<S>>,
    body: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), HandlerError> {
    let Json(input) = body?;
    let recipe = store.create(input)?;
    info!(id = %recipe.id, name = %recipe.name, "created recipe");
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// `PUT /recipes/:id` - `200` with the updated recipe.
async fn update_handler<S: RecipeStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    body: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<Json<Recipe>, HandlerError> {
    let Json(input) = body?;
    let recipe = store.update(&id, input)?;
    info!(id = %recipe.id, "updated recipe");
    Ok(Json(recipe))
}

/// `DELETE /recipes/:id` - `204`, empty body.
async fn delete_handler<S: RecipeStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, HandlerError> {
    store.delete(&id)?;
    info!(%id, "deleted recipe");
    Ok(StatusCode::NO_CONTENT)
}
