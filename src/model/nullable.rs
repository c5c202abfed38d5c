//! Serde helpers for partial-update payloads.

use serde::{Deserialize, Deserializer};

/// Deserializes a field that distinguishes "absent" from "explicitly null".
///
/// Combine with `#[serde(default)]`: a missing key stays `None`, `null` becomes
/// `Some(None)` and a value becomes `Some(Some(value))`.
pub fn deserialize_nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
