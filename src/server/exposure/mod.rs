//! Ways of exposing a [`ServerHost`](super::host::ServerHost)
//!
//! Each exposure consumes the host and produces a Router for its protocol.

pub mod rest;

pub use rest::RestExposure;
