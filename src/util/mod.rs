use serde::de;
use std::fmt::Display;
use std::str::FromStr;

/// Treats a missing, empty or whitespace-only query value as absent.
pub(crate) fn deserialize_blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: de::Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let s: String = de::Deserialize::deserialize(deserializer)?;

    if s.trim().is_empty() {
        return Ok(None);
    }

    s.parse().map(Some).map_err(de::Error::custom)
}

pub(crate) fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
