//! Startup data for the in-memory stores

use crate::entities::{Dish, Order};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_SEED: &str = include_str!("../../data/seed.yaml");

/// Records the stores start with
///
/// Read from YAML (which also accepts JSON documents). Either list may be
/// omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

impl SeedData {
    /// Parse seed data from a YAML or JSON string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let seed: Self = serde_yaml::from_str(yaml)?;
        Ok(seed)
    }

    /// Load seed data from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("invalid seed file {}", path.display()))
    }

    /// The seed compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_SEED).context("invalid built-in seed data")
    }

    /// Load `path` if given, otherwise the built-in seed
    pub fn load(path: Option<&str>) -> Result<Self> {
        let seed = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::builtin()?,
        };
        tracing::info!(
            source = path.unwrap_or("built-in"),
            dishes = seed.dishes.len(),
            orders = seed.orders.len(),
            "seed data loaded"
        );
        Ok(seed)
    }

    /// No records at all
    pub fn empty() -> Self {
        Self::default()
    }
}
