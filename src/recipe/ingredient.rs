//! Ingredient - a single item of a recipe's ingredient list.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One ingredient: free text (`"2 cups water"`) or a bare number (`2`).
///
/// Untagged, so the JSON representation is the plain string or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredient {
    Text(String),
    Number(Number),
}

impl From<&str> for Ingredient {
    fn from(value: &str) -> Self {
        Ingredient::Text(value.to_string())
    }
}

impl From<String> for Ingredient {
    fn from(value: String) -> Self {
        Ingredient::Text(value)
    }
}

impl From<i64> for Ingredient {
    fn from(value: i64) -> Self {
        Ingredient::Number(Number::from(value))
    }
}

impl From<u64> for Ingredient {
    fn from(value: u64) -> Self {
        Ingredient::Number(Number::from(value))
    }
}

impl From<i32> for Ingredient {
    fn from(value: i32) -> Self {
        Ingredient::Number(Number::from(value))
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ingredient::Text(text) => write!(f, "{}", text),
            Ingredient::Number(n) => write!(f, "{}", n),
        }
    }
}
