use crate::{error::TourError, schemas::SchemaHandle};
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use tracing::debug;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Check a generative payload against a completion schema.
///
/// Failures are reported as [`TourError::Parse`]: a payload that does not
/// conform is treated exactly like one that is not JSON at all.
pub fn validate_structured_payload(
    schema: &SchemaHandle,
    payload: &Value,
) -> std::result::Result<(), TourError> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema.schema_json())
        .map_err(|err| {
            TourError::Parse(format!(
                "Failed to prepare `{}` schema for validation: {}",
                schema.schema_name(),
                err
            ))
        })?;

    let result = validator.validate(payload);
    let Err(errors) = result else {
        return Ok(());
    };

    let mut details = Vec::new();
    let mut truncated = false;

    for (idx, error) in errors.enumerate() {
        if idx == MAX_SCHEMA_ERRORS {
            truncated = true;
            break;
        }
        let path = error.instance_path.to_string();
        let path = if path.is_empty() {
            "<root>".to_string()
        } else {
            path
        };
        details.push(format!("{}: {}", path, error));
    }

    let mut detail_str = if details.is_empty() {
        "payload failed schema validation".to_string()
    } else {
        details.join("; ")
    };
    if truncated {
        detail_str.push_str("; additional errors truncated");
    }

    debug!(
        target: "tour_agent::schema",
        schema = schema.schema_name(),
        errors = %detail_str,
    );

    Err(TourError::Parse(format!(
        "Payload does not match `{}` schema: {}",
        schema.schema_name(),
        detail_str
    )))
}
