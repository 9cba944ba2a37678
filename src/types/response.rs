use std::any::{type_name, TypeId};

use serde_json::Value;

use crate::{
    error::{Result, TourError},
    schemas::{validate_structured_payload, CompletionSchema, SchemaHandle},
};

/// Validate a generative payload against its schema and decode it.
///
/// Both steps report [`TourError::Parse`] so callers can treat a
/// non-conforming payload the same way as one that is not JSON.
pub fn deserialize_structured_response<T>(payload: &Value, schema: &SchemaHandle) -> Result<T>
where
    T: CompletionSchema,
{
    ensure_schema_matches::<T>(schema)?;
    validate_structured_payload(schema, payload)?;

    let raw = payload.to_string();
    let mut deserializer = serde_json::Deserializer::from_str(&raw);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        TourError::Parse(format!(
            "failed to deserialize `{}` at {}: {}",
            schema.schema_name(),
            location,
            err.into_inner()
        ))
    })?;

    Ok(value)
}

fn ensure_schema_matches<T: 'static>(schema: &SchemaHandle) -> Result<()> {
    let expected = TypeId::of::<T>();
    if schema.type_id() != expected {
        return Err(TourError::Parse(format!(
            "schema `{}` does not match target type `{}`",
            schema.schema_name(),
            type_name::<T>(),
        )));
    }
    Ok(())
}
