use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use crate::{
    config::Settings,
    error::Result,
    schemas::CompletionSchema,
    services::{
        openai_client::{first_choice_content, ChatCompletionRequest, OpenAIClient},
        prompts,
    },
    types::ItineraryDraft,
};

/// Persona and sampling parameters for one kind of generative request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionTask {
    /// Structured itinerary (and route optimization) generation
    Itinerary,
    /// Free-text destination information
    LocationInfo,
    /// Personalized advice, also used for vehicle assignment
    Recommendations,
}

impl CompletionTask {
    pub fn max_tokens(self) -> u32 {
        match self {
            CompletionTask::Itinerary => 2000,
            CompletionTask::LocationInfo => 1000,
            CompletionTask::Recommendations => 1500,
        }
    }

    pub fn temperature(self) -> f64 {
        match self {
            CompletionTask::Itinerary => 0.7,
            CompletionTask::LocationInfo => 0.6,
            CompletionTask::Recommendations => 0.8,
        }
    }

    pub fn system_prompt(self) -> String {
        match self {
            CompletionTask::Itinerary => {
                prompts::itinerary_system_prompt(ItineraryDraft::schema())
            }
            CompletionTask::LocationInfo => prompts::LOCATION_SYSTEM_PROMPT.to_string(),
            CompletionTask::Recommendations => prompts::RECOMMENDATION_SYSTEM_PROMPT.to_string(),
        }
    }
}

/// Fallible text-completion capability.
///
/// Implementations return the raw model text; interpreting it is the
/// caller's job.
#[async_trait]
pub trait GenerativeDelegate: Send + Sync {
    async fn generate(&self, task: CompletionTask, prompt: &str) -> Result<String>;
}

/// [`GenerativeDelegate`] backed by an OpenAI-compatible chat endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiDelegate {
    client: OpenAIClient,
    model: String,
}

impl OpenAiDelegate {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.require_api_key()?;
        let client = OpenAIClient::new(api_key, Duration::from_secs(settings.timeout_secs))?
            .with_base_url(settings.base_url.clone());
        Ok(Self::new(client, settings.model.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerativeDelegate for OpenAiDelegate {
    async fn generate(&self, task: CompletionTask, prompt: &str) -> Result<String> {
        let body = ChatCompletionRequest::new(&self.model)
            .with_system(task.system_prompt())
            .with_user(prompt)
            .with_max_tokens(Some(task.max_tokens()))
            .with_temperature(Some(task.temperature()))
            .into_value();

        debug!(
            target: "tour_agent::delegate",
            ?task,
            model = %self.model,
            prompt_chars = prompt.len(),
            "requesting completion"
        );

        let response = self.client.chat_completion(&body).await?;
        let content = first_choice_content(&response)?;

        info!(
            target: "tour_agent::delegate",
            ?task,
            response_chars = content.len(),
            "completion received"
        );
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_sampling_parameters() {
        assert_eq!(CompletionTask::Itinerary.max_tokens(), 2000);
        assert_eq!(CompletionTask::LocationInfo.temperature(), 0.6);
        assert_eq!(CompletionTask::Recommendations.max_tokens(), 1500);
        assert_eq!(CompletionTask::Recommendations.temperature(), 0.8);
    }

    #[test]
    fn test_itinerary_system_prompt_embeds_schema() {
        let prompt = CompletionTask::Itinerary.system_prompt();
        assert!(prompt.contains("tour guide"));
        assert!(prompt.contains("vehicleAssignments"));
    }
}
