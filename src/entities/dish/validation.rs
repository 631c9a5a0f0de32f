//! Dish validation chains
//!
//! Create and update share the same field checks, in this order:
//! presence of every field, then name, description, price, image_url.
//! Update additionally rejects a payload id that differs from the route.

use super::model::{Dish, DishPayload};
use crate::core::Chain;
use crate::core::validation::validators::{id_matches_route, not_blank, positive_integer, required};

const DISH: &str = "Dish";

pub const PRICE_MESSAGE: &str = "Dish must have a price that is an integer greater than 0";

/// Field checks shared by create and update
pub fn field_chain() -> Chain<DishPayload, Dish> {
    Chain::new("dish")
        .check(required(DISH, "name", |p: &DishPayload| &p.name))
        .check(required(DISH, "description", |p: &DishPayload| &p.description))
        .check(required(DISH, "price", |p: &DishPayload| &p.price))
        .check(required(DISH, "image_url", |p: &DishPayload| &p.image_url))
        .check(not_blank(DISH, "name", |p: &DishPayload| &p.name))
        .check(not_blank(DISH, "description", |p: &DishPayload| &p.description))
        .check(positive_integer(PRICE_MESSAGE, |p: &DishPayload| &p.price))
        .check(not_blank(DISH, "image_url", |p: &DishPayload| &p.image_url))
}

/// `POST /dishes`
pub fn create_chain() -> Chain<DishPayload, Dish> {
    field_chain()
}

/// `PUT /dishes/{dish_id}`, run after the existence lookup
pub fn update_chain() -> Chain<DishPayload, Dish> {
    field_chain().check(id_matches_route(DISH, |p: &DishPayload| &p.id))
}
