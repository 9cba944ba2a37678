use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::{Result, TourError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const MAX_RETRIES: usize = 3;
const INITIAL_BACKOFF: Duration = Duration::from_millis(250);
const MAX_RETRY_AFTER: Duration = Duration::from_secs(60);

/// Minimal client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone, Debug)]
pub struct OpenAIClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TourError::Delegate(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a completion request, retrying 429 and 5xx responses with
    /// exponential back-off.
    pub async fn chat_completion(&self, body: &Value) -> Result<Value> {
        let request_url = build_chat_url(&self.base_url);
        let mut attempt = 0;
        let mut backoff = INITIAL_BACKOFF;

        loop {
            let response = self
                .http
                .post(&request_url)
                .bearer_auth(&self.api_key)
                .header("Content-Type", "application/json")
                .json(body)
                .send()
                .await
                .map_err(|err| TourError::Delegate(format!("HTTP request failed: {err}")))?;

            let status = response.status();
            let headers = response.headers().clone();
            let response_text = response
                .text()
                .await
                .map_err(|err| TourError::Delegate(format!("Failed to read response: {err}")))?;

            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after_duration = retry_delay(
                    headers
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|value| value.to_str().ok()),
                    backoff,
                );

                if attempt < MAX_RETRIES {
                    warn!(
                        target: "tour_agent::delegate",
                        attempt,
                        wait_ms = retry_after_duration.as_millis() as u64,
                        "rate limited, retrying"
                    );
                    tokio::time::sleep(retry_after_duration).await;
                    attempt += 1;
                    backoff *= 2;
                    continue;
                }

                return Err(TourError::RateLimit {
                    retry_after: retry_after_duration.as_secs().max(1),
                });
            }

            if status.is_server_error() && attempt < MAX_RETRIES {
                warn!(
                    target: "tour_agent::delegate",
                    attempt,
                    status = status.as_u16(),
                    "server error, retrying"
                );
                tokio::time::sleep(backoff).await;
                attempt += 1;
                backoff *= 2;
                continue;
            }

            let response_json: Value = match serde_json::from_str(&response_text) {
                Ok(value) => value,
                Err(err) if status.is_success() => {
                    return Err(TourError::Delegate(format!("Failed to parse JSON: {err}")));
                }
                Err(_) => Value::Null,
            };

            if !status.is_success() {
                let api_message = response_json
                    .get("error")
                    .and_then(|error| error.get("message"))
                    .and_then(|value| value.as_str())
                    .map(|s| s.to_string())
                    .unwrap_or(response_text);

                return Err(TourError::Delegate(format!(
                    "HTTP {} error: {}",
                    status, api_message
                )));
            }

            if let Some(error) = response_json.get("error") {
                let error_message = error
                    .get("message")
                    .and_then(|value| value.as_str())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| error.to_string());
                return Err(TourError::Delegate(format!("API error: {}", error_message)));
            }

            debug!(target: "tour_agent::delegate", attempt, status = status.as_u16(), "completion response ok");
            return Ok(response_json);
        }
    }
}

fn build_chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

/// Text of the first choice of a completion response.
pub fn first_choice_content(response: &Value) -> Result<String> {
    response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(|content| content.to_string())
        .ok_or_else(|| TourError::Delegate("completion response has no message content".to_string()))
}

#[derive(Clone, Debug)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Value>,
    max_tokens: Option<u32>,
    temperature: Option<f64>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(json!({ "role": "system", "content": content.into() }));
        self
    }

    pub fn with_user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(json!({ "role": "user", "content": content.into() }));
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f64>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn into_value(self) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": self.messages,
        });

        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        if let Some(temperature) = self.temperature {
            body["temperature"] = json!(temperature);
        }

        body
    }
}

/// Wait before retrying a 429: the server's `Retry-After` seconds, capped at
/// one minute, or the current back-off when the header is absent or unreadable.
fn retry_delay(retry_after: Option<&str>, backoff: Duration) -> Duration {
    retry_after
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(|secs| Duration::from_secs(secs).min(MAX_RETRY_AFTER))
        .unwrap_or(backoff)
}
