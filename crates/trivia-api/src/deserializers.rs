use serde::{Deserialize, Deserializer};

// The stock frontend posts numeric fields as strings ("difficulty": "1"),
// API clients send plain numbers. Both must coerce to an integer.
pub fn i64_from_int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => Ok(value),
        IntOrString::Str(raw) => raw.trim().parse().map_err(serde::de::Error::custom),
    }
}
