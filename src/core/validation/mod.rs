//! Validation chains
//!
//! Every mutating request runs through an ordered list of independent checks
//! before its handler touches the store. The first failure is the response.

pub mod chain;
pub mod extractor;
pub mod validators;

pub use chain::{Chain, Submission};
pub use extractor::Payload;
pub use validators::{Truthy, find_existing};
