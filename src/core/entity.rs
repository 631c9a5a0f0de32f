//! Record trait shared by every resource kept in a store

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base trait for all records in the system.
///
/// A record is owned by exactly one store and is addressed by its string id.
/// The id is assigned once at creation (or by seed data) and never changes.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Capitalized kind used in client-facing messages (e.g., "Dish", "Order")
    fn kind() -> &'static str;

    /// The plural resource name used in URLs (e.g., "dishes", "orders")
    fn resource_name() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> &str;
}
