//! Input validation for the generate endpoint.
//!
//! Pure: a raw JSON body in, a validated record of trimmed non-empty strings
//! out, or a validation failure naming the offending field(s). Absent keys,
//! non-string values, and whitespace-only values are all treated as missing.

use serde_json::Value;

use crate::errors::AppError;

/// Maximum accepted length per field, in characters.
pub const MAX_FIELD_LEN: usize = 1000;

/// A validated generate request. Fields are trimmed; `analysis` is `None`
/// when the client omitted it or sent only whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioInput {
    pub fact: String,
    pub analysis: Option<String>,
    pub mutation: String,
}

/// Validates a raw request body against the canonical schema
/// `{fact, analysis?, mutation}`.
pub fn validate_request(body: &Value) -> Result<ScenarioInput, AppError> {
    let Some(object) = body.as_object() else {
        return Err(AppError::Validation {
            reason: "Request body must be a JSON object".to_string(),
            received_keys: vec![],
        });
    };

    let received_keys: Vec<String> = object.keys().cloned().collect();

    let analysis = trimmed_field(object, "analysis");

    let (fact, mutation) = match (
        trimmed_field(object, "fact"),
        trimmed_field(object, "mutation"),
    ) {
        (Some(fact), Some(mutation)) => (fact, mutation),
        (fact, mutation) => {
            let missing: Vec<&str> = [("fact", fact.is_none()), ("mutation", mutation.is_none())]
                .iter()
                .filter(|(_, is_missing)| *is_missing)
                .map(|(name, _)| *name)
                .collect();
            return Err(AppError::Validation {
                reason: format!(
                    "Missing input for required field(s): {}",
                    missing.join(", ")
                ),
                received_keys,
            });
        }
    };

    for (name, value) in [
        ("fact", fact.as_str()),
        ("analysis", analysis.as_deref().unwrap_or_default()),
        ("mutation", mutation.as_str()),
    ] {
        if value.chars().count() > MAX_FIELD_LEN {
            return Err(AppError::Validation {
                reason: format!("Input too long: '{name}' exceeds {MAX_FIELD_LEN} characters"),
                received_keys,
            });
        }
    }

    Ok(ScenarioInput {
        fact,
        analysis,
        mutation,
    })
}

/// Extracts a field as a trimmed non-empty string. Non-string values count
/// as missing, never coerced.
fn trimmed_field(object: &serde_json::Map<String, Value>, name: &str) -> Option<String> {
    object
        .get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn reason_of(err: AppError) -> String {
        match err {
            AppError::Validation { reason, .. } => reason,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_triple_passes() {
        let body = json!({
            "fact": "Taxpayer sold stock",
            "analysis": "Gain is long-term capital gain",
            "mutation": "Assume taxpayer is foreign"
        });
        let input = validate_request(&body).unwrap();
        assert_eq!(input.fact, "Taxpayer sold stock");
        assert_eq!(
            input.analysis.as_deref(),
            Some("Gain is long-term capital gain")
        );
        assert_eq!(input.mutation, "Assume taxpayer is foreign");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let body = json!({"fact": "  padded  ", "mutation": "\tchange\n"});
        let input = validate_request(&body).unwrap();
        assert_eq!(input.fact, "padded");
        assert_eq!(input.mutation, "change");
    }

    #[test]
    fn test_analysis_is_optional() {
        let body = json!({"fact": "f", "mutation": "m"});
        let input = validate_request(&body).unwrap();
        assert!(input.analysis.is_none());
    }

    #[test]
    fn test_blank_analysis_treated_as_absent() {
        let body = json!({"fact": "f", "analysis": "   ", "mutation": "m"});
        let input = validate_request(&body).unwrap();
        assert!(input.analysis.is_none());
    }

    #[test]
    fn test_missing_fact_is_reported() {
        let body = json!({"mutation": "m"});
        let reason = reason_of(validate_request(&body).unwrap_err());
        assert!(reason.starts_with("Missing input"));
        assert!(reason.contains("fact"));
        assert!(!reason.contains("mutation"));
    }

    #[test]
    fn test_empty_fact_counts_as_missing() {
        let body = json!({"fact": "", "mutation": "m"});
        let reason = reason_of(validate_request(&body).unwrap_err());
        assert!(reason.contains("fact"));
    }

    #[test]
    fn test_whitespace_only_fact_counts_as_missing() {
        let body = json!({"fact": "   \n\t", "mutation": "m"});
        let reason = reason_of(validate_request(&body).unwrap_err());
        assert!(reason.contains("fact"));
    }

    #[test]
    fn test_non_string_fact_counts_as_missing() {
        let body = json!({"fact": 42, "mutation": "m"});
        let reason = reason_of(validate_request(&body).unwrap_err());
        assert!(reason.contains("fact"));
    }

    #[test]
    fn test_all_missing_fields_listed_together() {
        let body = json!({"analysis": "only this"});
        let reason = reason_of(validate_request(&body).unwrap_err());
        assert!(reason.contains("fact"));
        assert!(reason.contains("mutation"));
    }

    #[test]
    fn test_received_keys_reports_what_the_client_sent() {
        let body = json!({"fact": "", "mutation": "x"});
        match validate_request(&body).unwrap_err() {
            AppError::Validation { received_keys, .. } => {
                assert_eq!(received_keys, vec!["fact", "mutation"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_field_at_cap_passes() {
        let body = json!({"fact": "a".repeat(MAX_FIELD_LEN), "mutation": "m"});
        assert!(validate_request(&body).is_ok());
    }

    #[test]
    fn test_field_over_cap_is_rejected() {
        let body = json!({"fact": "a".repeat(MAX_FIELD_LEN + 1), "mutation": "m"});
        let reason = reason_of(validate_request(&body).unwrap_err());
        assert!(reason.contains("too long"));
        assert!(reason.contains("fact"));
        assert!(reason.contains("1000"));
    }

    #[test]
    fn test_cap_counts_characters_not_bytes() {
        // 1000 two-byte characters is exactly at the cap.
        let body = json!({"fact": "é".repeat(MAX_FIELD_LEN), "mutation": "m"});
        assert!(validate_request(&body).is_ok());
    }

    #[test]
    fn test_overlong_analysis_is_rejected() {
        let body = json!({
            "fact": "f",
            "analysis": "a".repeat(MAX_FIELD_LEN + 1),
            "mutation": "m"
        });
        let reason = reason_of(validate_request(&body).unwrap_err());
        assert!(reason.contains("analysis"));
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let reason = reason_of(validate_request(&json!(["not", "an", "object"])).unwrap_err());
        assert!(reason.contains("JSON object"));
    }
}
