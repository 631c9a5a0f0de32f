//! HTTP server assembly
//!
//! `ServerBuilder` seeds the stores, registers the dish and order resources
//! and serves them over REST with health checks and JSON fallbacks.

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::RestExposure;
pub use host::ServerHost;
