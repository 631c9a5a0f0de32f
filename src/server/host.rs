//! Server host: the state every exposure is built from
//!
//! The host owns one store handle per resource and the registry of route
//! descriptors bound to those stores, which share one id generator. Handles are
//! cheap clones of the same `Arc`, so tests can keep one and inspect the store
//! the router mutates.

use crate::core::SharedIdGenerator;
use crate::entities::{Dish, DishAppState, DishDescriptor, Order, OrderAppState, OrderDescriptor};
use crate::server::entity_registry::EntityRegistry;
use crate::storage::{InMemoryStore, SeedData};
use anyhow::{Context, Result};

/// Application state, independent of how it is served
pub struct ServerHost {
    pub dishes: InMemoryStore<Dish>,
    pub orders: InMemoryStore<Order>,
    pub entity_registry: EntityRegistry,
}

impl ServerHost {
    /// Seed the stores and register the dish and order resources
    ///
    /// Fails when the seed repeats an id.
    pub fn new(seed: SeedData, ids: SharedIdGenerator) -> Result<Self> {
        let dishes = InMemoryStore::seeded(seed.dishes).context("invalid dish seed data")?;
        let orders = InMemoryStore::seeded(seed.orders).context("invalid order seed data")?;

        let mut entity_registry = EntityRegistry::new();
        entity_registry.register(Box::new(DishDescriptor::new(DishAppState {
            store: dishes.clone(),
            ids: ids.clone(),
        })));
        entity_registry.register(Box::new(OrderDescriptor::new(OrderAppState {
            store: orders.clone(),
            ids,
        })));

        Ok(Self {
            dishes,
            orders,
            entity_registry,
        })
    }

    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }
}
