//! Best-effort decoding of JSON-encoded inputs.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// A JSON input that could not be decoded.
#[derive(Debug, Error)]
pub enum JsonInputError {
    #[error("Failed to parse JSON input {name}: {raw}")]
    Malformed {
        name: String,
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode `raw` as `T`. An empty string and JSON `null` decode to `None`.
pub fn parse_json_input<T: DeserializeOwned>(
    name: &str,
    raw: &str,
) -> Result<Option<T>, JsonInputError> {
    if raw.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(raw).map_err(|source| JsonInputError::Malformed {
        name: name.to_string(),
        raw: raw.to_string(),
        source,
    })
}

/// Decode an optional JSON input, falling back to `None` with a warning.
pub fn optional_json<T: DeserializeOwned>(name: &str, raw: Option<&str>) -> Option<T> {
    match parse_json_input(name, raw.unwrap_or_default()) {
        Ok(value) => value,
        Err(err) => {
            let JsonInputError::Malformed { source, .. } = &err;
            tracing::warn!(input = name, error = %source, "{}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::CustomContext;

    #[test]
    fn test_empty_is_absent() {
        let parsed: Option<Vec<String>> = parse_json_input("rules", "").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_null_is_absent() {
        let parsed: Option<Vec<String>> = parse_json_input("rules", "null").unwrap();
        assert!(parsed.is_none());
        let ctx: Option<CustomContext> = parse_json_input("custom_context", "null").unwrap();
        assert!(ctx.is_none());
    }

    #[test]
    fn test_malformed_keeps_parser_cause() {
        let err = parse_json_input::<Vec<String>>("rules", "[broken").unwrap_err();
        let source = std::error::Error::source(&err).expect("serde_json cause");
        assert!(source.to_string().contains("line 1 column"));
    }

    #[test]
    fn test_valid_array() {
        let parsed: Option<Vec<String>> = parse_json_input("rules", r#"["a","b"]"#).unwrap();
        assert_eq!(parsed, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_malformed_keeps_raw() {
        let err = parse_json_input::<Vec<String>>("rules", "[not json").unwrap_err();
        let JsonInputError::Malformed { name, raw, .. } = &err;
        assert_eq!(name, "rules");
        assert_eq!(raw, "[not json");
        assert!(err.to_string().contains("[not json"));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        assert!(parse_json_input::<Vec<String>>("rules", r#"["a", 1]"#).is_err());
        assert!(parse_json_input::<CustomContext>("custom_context", r#""text""#).is_err());
    }

    #[test]
    fn test_optional_json_falls_back() {
        let rules: Option<Vec<String>> = optional_json("rules", Some("{oops"));
        assert!(rules.is_none());

        let configs: Option<Vec<String>> = optional_json("mcp_configs", None);
        assert!(configs.is_none());

        let ctx: Option<CustomContext> =
            optional_json("custom_context", Some(r#"{"custom_guidelines":"x"}"#));
        assert_eq!(ctx.unwrap().custom_guidelines.as_deref(), Some("x"));
    }
}
