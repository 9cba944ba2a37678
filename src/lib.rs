//! tour-agent-rs: tour itinerary planning on top of an LLM completion endpoint.
//!
//! Requests are checked by a capacity validator, turned into a prompt, sent to
//! a [`GenerativeDelegate`], and the raw answer is interpreted defensively into
//! an [`ItineraryRecord`] that is kept in an [`ItineraryStore`]. Seat
//! assignment falls back to a deterministic greedy fill, and analytics are
//! pure arithmetic over stored records.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tour_agent_rs::{
//!     config::Settings, InMemoryItineraryStore, OpenAiDelegate, TourPlanner,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::from_env()?;
//!     let planner = TourPlanner::new(
//!         Arc::new(OpenAiDelegate::from_settings(&settings)?),
//!         Arc::new(InMemoryItineraryStore::new()),
//!     );
//!
//!     for tour in planner.list_itineraries().await? {
//!         println!("{}: {}", tour.id, tour.title);
//!     }
//!     Ok(())
//! }
//! ```

extern crate self as tour_agent_rs;

pub mod config;
pub mod core;
pub mod error;
pub mod http;
pub mod schemas;
pub mod services;
pub mod store;
pub mod types;

pub use crate::core::{analyze, TourPlanner};
pub use error::{Result, TourError};
pub use schemas::{decode_payload, CompletionSchema, SchemaHandle};
pub use services::{CompletionTask, GenerativeDelegate, OpenAiDelegate};
pub use store::{InMemoryItineraryStore, ItineraryStore};
pub use tour_agent_macros::completion_schema;
pub use types::response::deserialize_structured_response;
pub use types::{ItineraryDraft, ItineraryRecord, TourConfiguration};

#[cfg(feature = "cli")]
pub mod cli;
