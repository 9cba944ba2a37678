//! JSON schema plumbing for structured generative responses and request bodies.

pub mod schema;
pub mod validation;
pub mod validator;

pub use schema::{apply_doc_comments, CompletionSchema, SchemaHandle};
pub use validation::validate_structured_payload;
pub use validator::decode_payload;
