use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde deserialization.
///
/// Accepts hyphenated aliases (`multiple-choice` for `multiple_choice`).
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}
