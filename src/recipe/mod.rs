//! Recipe - the record type owned by the store, and its validated input.
//!
//! A `Recipe` is a name plus an ordered list of ingredients. Ingredients
//! are either free text or a bare number, exactly as they appear in the
//! JSON body (`["flour", "eggs", 2]`).
//!
//! ## Example
//!
//! ```ignore
//! use recipe_service::{Ingredient, RecipeInput};
//!
//! let input = RecipeInput::new("pancakes", vec![Ingredient::from("flour"), Ingredient::from(2)]);
//! let fields = input.validate()?;
//! assert_eq!(fields.name, "pancakes");
//! ```

mod ingredient;

pub use ingredient::Ingredient;

use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// A stored recipe.
///
/// Serializes to exactly `{ "id", "name", "ingredients" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub(crate) fn from_fields(id: String, fields: RecipeFields) -> Self {
        Self {
            id,
            name: fields.name,
            ingredients: fields.ingredients,
        }
    }

    /// Replace name and ingredients wholesale. The id is left untouched.
    pub(crate) fn replace(&mut self, fields: RecipeFields) {
        self.name = fields.name;
        self.ingredients = fields.ingredients;
    }
}

/// Request body for create and update.
///
/// Every field is optional at the type level so that a body with a
/// missing field still decodes; `validate` decides whether it is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeInput {
    /// Client-echoed id (update only). Must match the target id when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
}

/// The mutable part of a recipe after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeFields {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

impl RecipeInput {
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            ingredients: Some(ingredients),
        }
    }

    /// Attach an id to the input, as a PUT body would carry it.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Check that `name` and `ingredients` are present and non-empty.
    pub fn validate(self) -> Result<RecipeFields, StoreError> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            Some(_) => return Err(StoreError::InvalidInput("`name` must not be empty".into())),
            None => return Err(StoreError::InvalidInput("Missing `name` in request body".into())),
        };

        let ingredients = match self.ingredients {
            Some(items) if !items.is_empty() => items,
            Some(_) => {
                return Err(StoreError::InvalidInput(
                    "`ingredients` must not be empty".into(),
                ))
            }
            None => {
                return Err(StoreError::InvalidInput(
                    "Missing `ingredients` in request body".into(),
                ))
            }
        };

        Ok(RecipeFields { name, ingredients })
    }

    /// Validate for an update of `target_id`.
    ///
    /// Same rules as `validate`, plus a body id (if given) must equal the
    /// id being updated.
    pub fn validate_for(self, target_id: &str) -> Result<RecipeFields, StoreError> {
        if let Some(body_id) = &self.id {
            if body_id != target_id {
                return Err(StoreError::InvalidInput(format!(
                    "Request path id ({}) and request body id ({}) must match",
                    target_id, body_id
                )));
            }
        }
        self.validate()
    }
}
