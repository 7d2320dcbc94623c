//! recipe_service - an in-memory recipe collection behind a REST API.
//!
//! The `store` module owns the data and enforces the rules; `service`
//! exposes it over HTTP with axum (feature `http`, on by default).
//!
//! ```ignore
//! use std::sync::Arc;
//! use recipe_service::{service, InMemoryRecipeStore, ServiceConfig};
//!
//! let config = ServiceConfig::load()?;
//! recipe_service::logging::init(&config.log_filter);
//! let server = service::run_server(&config, Arc::new(InMemoryRecipeStore::seeded()?)).await?;
//! ```

pub mod logging;
mod recipe;
pub mod service;
mod settings;
mod store;

pub use recipe::{Ingredient, Recipe, RecipeFields, RecipeInput};
pub use service::HandlerError;
pub use settings::ServiceConfig;
pub use store::{InMemoryRecipeStore, RecipeStore, StoreError};

// Re-export so callers can match on configuration failures without
// depending on the config crate directly.
pub use config::ConfigError;
