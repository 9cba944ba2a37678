use crate::{error::TourError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a request body, naming the offending path on failure.
///
/// ```
/// use serde_json::json;
/// use tour_agent_rs::{schemas::decode_payload, types::Participant};
///
/// let err = decode_payload::<Participant>(json!({ "name": 7 })).unwrap_err();
/// assert!(err.to_string().contains("name"));
/// ```
pub fn decode_payload<T: DeserializeOwned>(body: Value) -> Result<T> {
    serde_path_to_error::deserialize(body).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        TourError::Validation(format!(
            "Request body invalid at {}: {}",
            location,
            err.into_inner()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Outer {
        inner: Vec<Inner>,
    }

    #[derive(Debug, Deserialize)]
    struct Inner {
        #[allow(dead_code)]
        capacity: u32,
    }

    #[test]
    fn test_decode_reports_nested_path() {
        let err = decode_payload::<Outer>(json!({ "inner": [{ "capacity": 2 }, { "capacity": "x" }] }))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("inner[1].capacity"), "{message}");
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_decode_accepts_valid_body() {
        let outer = decode_payload::<Outer>(json!({ "inner": [] })).unwrap();
        assert!(outer.inner.is_empty());
    }
}
