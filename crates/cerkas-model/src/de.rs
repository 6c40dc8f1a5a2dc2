//! Serde helpers for backend payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` the same way as a missing key.
///
/// Use together with `#[serde(default)]`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
