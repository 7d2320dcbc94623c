//! InMemoryRecipeStore - Vec-backed recipe store.

use std::sync::{Arc, RwLock};

use tracing::debug;
use uuid::Uuid;

use super::{RecipeStore, StoreError};
use crate::recipe::{Ingredient, Recipe, RecipeInput};

/// In-memory recipe store.
///
/// Records live in a `Vec` so listing preserves insertion order. All
/// mutations go through the write lock, reads clone a snapshot under the
/// read lock. Clone-friendly via Arc: clones share the same collection.
#[derive(Clone)]
pub struct InMemoryRecipeStore {
    recipes: Arc<RwLock<Vec<Recipe>>>,
}

impl Default for InMemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecipeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            recipes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-loaded with the given recipes.
    ///
    /// Inputs that fail validation are returned as an error and nothing
    /// after them is loaded.
    pub fn with_recipes<I>(inputs: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = RecipeInput>,
    {
        let store = Self::new();
        for input in inputs {
            store.create(input)?;
        }
        Ok(store)
    }

    /// Create a store holding the starter recipes, so a fresh service
    /// has something to list.
    pub fn seeded() -> Result<Self, StoreError> {
        Self::with_recipes(starter_recipes())
    }

    fn next_id() -> String {
        Uuid::new_v4().to_string()
    }
}

fn starter_recipes() -> Vec<RecipeInput> {
    vec![
        RecipeInput::new(
            "boiled white rice",
            vec![
                Ingredient::from("1 cup white rice"),
                Ingredient::from("2 cups water"),
                Ingredient::from("pinch of salt"),
            ],
        ),
        RecipeInput::new(
            "milkshake",
            vec![
                Ingredient::from("2 tbsp cocoa"),
                Ingredient::from("2 cups vanilla ice cream"),
                Ingredient::from("1 cup milk"),
            ],
        ),
    ]
}

impl RecipeStore for InMemoryRecipeStore {
    fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        let recipes = self
            .recipes
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(recipes.clone())
    }

    fn get(&self, id: &str) -> Result<Recipe, StoreError> {
        let recipes = self
            .recipes
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn create(&self, input: RecipeInput) -> Result<Recipe, StoreError> {
        let fields = input.validate()?;

        let mut recipes = self
            .recipes
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        let mut id = Self::next_id();
        while recipes.iter().any(|r| r.id == id) {
            id = Self::next_id();
        }

        let recipe = Recipe::from_fields(id, fields);
        recipes.push(recipe.clone());
        debug!(id = %recipe.id, name = %recipe.name, "recipe created");

        Ok(recipe)
    }

    fn update(&self, id: &str, input: RecipeInput) -> Result<Recipe, StoreError> {
        let fields = input.validate_for(id)?;

        let mut recipes = self
            .recipes
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        recipe.replace(fields);
        debug!(id = %recipe.id, name = %recipe.name, "recipe updated");

        Ok(recipe.clone())
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut recipes = self
            .recipes
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        let position = recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        recipes.remove(position);
        debug!(id, "recipe deleted");

        Ok(())
    }

    fn len(&self) -> Result<usize, StoreError> {
        let recipes = self
            .recipes
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(recipes.len())
    }
}
