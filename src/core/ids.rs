//! Identifier generation for new records

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh record identifiers
///
/// Implementations only need to produce candidates; the store re-draws
/// until the candidate does not collide with an existing record.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random 32-character lowercase hex ids (UUID v4, no hyphens)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic ids `<prefix>1`, `<prefix>2`, ...
///
/// Handy for tests and reproducible demos.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.prefix, n)
    }
}

/// Shared handle used by handlers
pub type SharedIdGenerator = Arc<dyn IdGenerator>;
