use schemars::schema::{RootSchema, Schema, SchemaObject};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{any::TypeId, sync::Arc};

/// Cached JSON schema of a structured completion type.
///
/// Produced once per type by `#[completion_schema]`; cloning is cheap.
#[derive(Clone, Debug)]
pub struct SchemaHandle {
    schema_name: &'static str,
    type_name: &'static str,
    type_id: TypeId,
    schema_json: Arc<Value>,
}

impl SchemaHandle {
    pub fn from_root_schema<T: 'static>(
        schema_name: &'static str,
        type_name: &'static str,
        root: RootSchema,
    ) -> Self {
        // A RootSchema is plain data; serializing it cannot fail.
        let schema_json = serde_json::to_value(root).unwrap_or(Value::Null);

        Self {
            schema_name,
            type_name,
            type_id: TypeId::of::<T>(),
            schema_json: Arc::new(schema_json),
        }
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema_name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn schema_json(&self) -> &Value {
        self.schema_json.as_ref()
    }

    /// Compact JSON rendering, suitable for embedding in a prompt.
    pub fn to_prompt_json(&self) -> String {
        self.schema_json.to_string()
    }
}

/// Types the generative delegate is asked to answer with.
pub trait CompletionSchema: DeserializeOwned + Send + Sync + 'static {
    fn schema() -> &'static SchemaHandle;
}

/// Fill gaps in a generated schema from doc comments captured by
/// `#[completion_schema]`.
///
/// Titles and descriptions schemars already derived are left alone.
pub fn apply_doc_comments(
    root: &mut RootSchema,
    title: &'static str,
    description: Option<&'static str>,
    field_docs: &[(&'static str, &'static str)],
) {
    fill_metadata(&mut root.schema, Some(title), description);

    let Some(object) = root.schema.object.as_deref_mut() else {
        return;
    };
    for (field, doc) in field_docs {
        if let Some(Schema::Object(property)) = object.properties.get_mut(*field) {
            fill_metadata(property, None, Some(*doc));
        }
    }
}

fn fill_metadata(schema: &mut SchemaObject, title: Option<&str>, description: Option<&str>) {
    let metadata = schema.metadata();
    metadata.title = metadata.title.take().or_else(|| title.map(str::to_owned));
    metadata.description = metadata
        .description
        .take()
        .or_else(|| description.map(str::to_owned));
}
