//! Entity descriptor for Dish

use super::handlers::{DishAppState, create_dish, get_dish, list_dishes, update_dish};
use super::model::Dish;
use crate::core::Record;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the Dish entity
///
/// Dishes have no delete route; `DELETE /dishes/{dish_id}` answers 405.
pub struct DishDescriptor {
    pub state: DishAppState,
}

impl DishDescriptor {
    pub fn new(state: DishAppState) -> Self {
        Self { state }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        "dish"
    }

    fn plural(&self) -> &str {
        Dish::resource_name()
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/dishes", get(list_dishes).post(create_dish))
            .route("/dishes/{dish_id}", get(get_dish).put(update_dish))
            .with_state(self.state.clone())
    }
}
