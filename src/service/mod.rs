//! REST transport for the recipe store.
//!
//! Maps HTTP verbs on `/recipes` onto a `RecipeStore`. Uses axum for
//! routing and requires the `http` feature (on by default).
//!
//! ## Routes
//!
//! - `GET /recipes` - list all recipes, `200` with a JSON array.
//! - `GET /recipes/:id` - one recipe, `404` if absent.
//! - `POST /recipes` - create, `201` with the stored recipe, `400` on bad input.
//! - `PUT /recipes/:id` - replace name and ingredients, `200` / `400` / `404`.
//! - `DELETE /recipes/:id` - remove, `204` / `404`.
//! - `GET /health` - `{ "ok": true, "recipes": n }`.
//!
//! Error responses carry a plain-text body, never JSON.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use recipe_service::{service, InMemoryRecipeStore, ServiceConfig};
//!
//! let store = Arc::new(InMemoryRecipeStore::seeded()?);
//!
//! // Compose the router with other axum routes
//! let app = service::router(store.clone());
//!
//! // Or run it, and stop it later
//! let server = service::run_server(&ServiceConfig::default(), store).await?;
//! server.shutdown().await?;
//! ```

mod error;
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
mod server;

pub use error::HandlerError;
#[cfg(feature = "http")]
pub use http::router;
#[cfg(feature = "http")]
pub use server::{run_server, RunningServer};
