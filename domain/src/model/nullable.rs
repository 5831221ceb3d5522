use serde::{Deserialize, Deserializer};

/// Reads an explicit JSON `null` as `T::default()`.
///
/// slurmrestd emits `null` for unset fields where it would otherwise send a
/// zero value. Pair with `#[serde(default)]` so absent keys behave the same.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
