pub mod attendance;
pub mod employee;

use serde::{Deserialize, Deserializer};

/// Reads an optional string field, treating JSON `null` like a missing field.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
