pub mod delegate;
pub mod openai_client;
pub mod prompts;
pub mod response_handler;

pub use delegate::{CompletionTask, GenerativeDelegate, OpenAiDelegate};
pub use openai_client::{ChatCompletionRequest, OpenAIClient};
pub use response_handler::{interpret_itinerary_response, strip_code_fences};
