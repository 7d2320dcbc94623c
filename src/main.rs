use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use recipe_service::{logging, service, InMemoryRecipeStore, RecipeStore, ServiceConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load()?;
    logging::init(&config.log_filter);

    let store = if config.seed {
        InMemoryRecipeStore::seeded()?
    } else {
        InMemoryRecipeStore::new()
    };
    info!(recipes = store.len()?, seed = config.seed, "recipe store ready");

    let server = service::run_server(&config, Arc::new(store)).await?;
    info!("serving recipes at {}/recipes", server.base_url());

    tokio::signal::ctrl_c().await?;
    server.shutdown().await?;
    Ok(())
}
