//! Dish entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod validation;

pub use descriptor::DishDescriptor;
pub use handlers::DishAppState;
pub use model::{Dish, DishFields, DishPayload};
