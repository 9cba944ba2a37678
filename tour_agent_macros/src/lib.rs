//! Procedural macros for `tour-agent-rs`.
//!
//! `#[completion_schema]` turns a named-field struct into a structured
//! completion type: it derives nothing itself but emits an implementation of
//! `tour_agent_rs::schemas::CompletionSchema` whose JSON schema is generated
//! once with `schemars` and decorated with the struct and field doc comments.

mod completion_schema;
mod schema_extraction;

use proc_macro::TokenStream;

#[proc_macro_attribute]
pub fn completion_schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    completion_schema::completion_schema(attr, item)
}
