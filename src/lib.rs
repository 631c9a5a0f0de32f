//! # GrubDash
//!
//! REST backend for a restaurant ordering workflow, built on Axum.
//!
//! ## Features
//!
//! - **Dishes**: list, create, read and update menu items
//! - **Orders**: full CRUD with a `pending → preparing → out-for-delivery → delivered` lifecycle
//! - **Validation Chains**: ordered, short-circuiting checks; the first failure is the response
//! - **In-Memory Stores**: insertion-ordered, seeded at startup from YAML
//! - **Uniform Errors**: every failure is `{ "message": ... }` with a fitting status
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_seed(SeedData::builtin()?)
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! Every body is wrapped in `{ "data": ... }`:
//!
//! ```text
//! POST /orders
//! { "data": { "deliverTo": "...", "mobileNumber": "...", "dishes": [{ "id": "...", "quantity": 2 }] } }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, Chain, DataEnvelope, ErrorResponse, IdGenerator, Payload, Record,
        SequentialIdGenerator, SharedIdGenerator, Submission, UuidIdGenerator,
    };

    // === Resources ===
    pub use crate::entities::{
        Dish, DishAppState, DishDescriptor, Order, OrderAppState, OrderDescriptor, OrderStatus,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryStore, Records, SeedData};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{
        EntityDescriptor, EntityRegistry, RestExposure, ServerBuilder, ServerHost,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
}
