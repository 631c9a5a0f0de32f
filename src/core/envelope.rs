//! The `{ "data": ... }` wrapper used by every request and response body

use serde::{Deserialize, Serialize};

/// Request and response envelope
///
/// Requests carry the resource fields under `data`; a missing `data` key
/// deserializes to `T::default()` so the validation chain reports the first
/// missing field instead of a parse error.
///
/// # Example
/// ```text
/// POST /dishes
/// { "data": { "name": "Dolcelatte and chickpea spaghetti", "price": 19, ... } }
///
/// 201 Created
/// { "data": { "id": "3c637d01...", "name": "Dolcelatte and chickpea spaghetti", ... } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
