//! Recipe store - the owner of the recipe collection.
//!
//! `RecipeStore` is the abstract CRUD contract; `InMemoryRecipeStore` is
//! the process-local implementation backing the HTTP service.
//!
//! ## Example
//!
//! ```ignore
//! use recipe_service::{InMemoryRecipeStore, Ingredient, RecipeInput, RecipeStore};
//!
//! let store = InMemoryRecipeStore::new();
//! let created = store.create(RecipeInput::new("toast", vec![Ingredient::from("bread")]))?;
//! let all = store.list()?;
//! store.delete(&created.id)?;
//! ```

mod error;
mod in_memory;
mod store;

pub use error::StoreError;
pub use in_memory::InMemoryRecipeStore;
pub use store::RecipeStore;
