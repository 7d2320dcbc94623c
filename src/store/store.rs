//! RecipeStore - Abstract CRUD storage for recipes.

use super::StoreError;
use crate::recipe::{Recipe, RecipeInput};

/// Abstract CRUD storage for recipes.
///
/// Every operation is atomic with respect to the others. Implementations
/// assign ids on `create` and never reuse them.
pub trait RecipeStore: Send + Sync {
    /// All recipes in insertion order.
    fn list(&self) -> Result<Vec<Recipe>, StoreError>;

    /// Get a single recipe by id.
    fn get(&self, id: &str) -> Result<Recipe, StoreError>;

    /// Validate the input, assign a fresh id and append the record.
    fn create(&self, input: RecipeInput) -> Result<Recipe, StoreError>;

    /// Replace name and ingredients of an existing recipe. The id is kept.
    fn update(&self, id: &str, input: RecipeInput) -> Result<Recipe, StoreError>;

    /// Remove a recipe by id.
    fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Number of stored recipes.
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
