//! Serde helpers for Sonarr payloads.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default value.
///
/// Sonarr writes `null` for unset strings, numbers and collections alike, so a
/// field that is present but `null` decodes the same as a missing one.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
