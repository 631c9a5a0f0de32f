//! Record storage and startup data

pub mod in_memory;
pub mod seed;

pub use in_memory::{InMemoryStore, Records};
pub use seed::SeedData;
