//! Resources served by the API

pub mod dish;
pub mod order;

pub use dish::{Dish, DishAppState, DishDescriptor};
pub use order::{Order, OrderAppState, OrderDescriptor, OrderStatus};
