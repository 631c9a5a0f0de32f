//! Dish record and its request payload

use crate::core::validation::validators::{as_positive_integer, as_text};
use crate::core::{ApiError, Record};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dish on the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in whole currency units, always > 0
    pub price: u64,
    pub image_url: String,
}

/// Validated dish fields, everything except the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Dish {
    pub fn new(id: impl Into<String>, fields: DishFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    /// Replace every field except the id
    pub fn overwrite(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}

impl Record for Dish {
    fn kind() -> &'static str {
        "Dish"
    }

    fn resource_name() -> &'static str {
        "dishes"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /dishes` and `PUT /dishes/{dish_id}`
///
/// Every field stays untyped until the chain has checked it, so `3.5` as a
/// price or `42` as a name get the field's message instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DishPayload {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub image_url: Option<Value>,
}

impl DishPayload {
    /// Convert a payload that passed the dish chain
    pub fn into_fields(self) -> Result<DishFields, ApiError> {
        let price = self
            .price
            .as_ref()
            .and_then(as_positive_integer)
            .ok_or_else(|| anyhow!("dish price passed validation but is not a positive integer"))?;

        Ok(DishFields {
            name: checked_text(&self.name, "name")?,
            description: checked_text(&self.description, "description")?,
            price,
            image_url: checked_text(&self.image_url, "image_url")?,
        })
    }
}

fn checked_text(value: &Option<Value>, field: &str) -> Result<String, ApiError> {
    as_text(value)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("dish {field} passed validation but is not a string").into())
}
