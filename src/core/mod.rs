//! Core module containing fundamental traits and types for the service

pub mod entity;
pub mod envelope;
pub mod error;
pub mod ids;
pub mod validation;

pub use entity::Record;
pub use envelope::DataEnvelope;
pub use error::{ApiError, ErrorResponse};
pub use ids::{IdGenerator, SequentialIdGenerator, SharedIdGenerator, UuidIdGenerator};
pub use validation::{Chain, Payload, Submission};
