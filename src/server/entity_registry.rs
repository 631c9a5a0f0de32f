//! Registry of the resources the server exposes

use axum::Router;

/// Describes how one resource is mounted
///
/// Each resource (dishes, orders) implements this to hand its routes, already
/// bound to their store, to the server.
pub trait EntityDescriptor: Send + Sync {
    /// Singular name, e.g. "dish"
    fn entity_type(&self) -> &str;

    /// Collection name and first path segment, e.g. "dishes"
    fn plural(&self) -> &str;

    /// Routes under `/{plural}` and `/{plural}/{id}`
    fn build_routes(&self) -> Router;
}

/// Every resource registered with the server, in registration order
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Register a descriptor, replacing any earlier one with the same entity type
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        self.descriptors
            .retain(|existing| existing.entity_type() != descriptor.entity_type());
        self.descriptors.push(descriptor);
    }

    /// Merge the routes of every registered resource
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.entity_type()).collect()
    }

    pub fn plurals(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.plural()).collect()
    }
}
