use thiserror::Error;

/// Main error type for tour planning
#[derive(Error, Debug)]
pub enum TourError {
    /// Malformed or infeasible tour input. Never retried.
    #[error("Invalid configuration at `{field}`: {message}")]
    Configuration { field: String, message: String },

    /// Request body did not decode into the expected shape.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The generative backend failed (network, quota, model error).
    #[error("Generative delegate error: {0}")]
    Delegate(String),

    #[error("Rate limit exceeded: retry after {retry_after}s")]
    RateLimit { retry_after: u64 },

    /// Generative output could not be interpreted. Recovered locally.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not computable: {0}")]
    DivisionDomain(String),

    #[error("Malformed duration: {0}")]
    MalformedDuration(String),

    #[error("Capacity exhausted: {participants} participants for {capacity} seats")]
    CapacityExhausted { participants: usize, capacity: u64 },

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TourError>;

impl TourError {
    pub fn configuration(field: impl Into<String>, message: impl Into<String>) -> Self {
        TourError::Configuration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, TourError::Delegate(_) | TourError::RateLimit { .. })
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            TourError::Configuration { .. } => "CONFIGURATION_ERROR",
            TourError::Validation(_) => "VALIDATION_ERROR",
            TourError::Delegate(_) => "DELEGATE_ERROR",
            TourError::RateLimit { .. } => "RATE_LIMIT_ERROR",
            TourError::Parse(_) => "PARSE_ERROR",
            TourError::NotFound(_) => "NOT_FOUND",
            TourError::DivisionDomain(_) => "DIVISION_DOMAIN_ERROR",
            TourError::MalformedDuration(_) => "MALFORMED_DURATION",
            TourError::CapacityExhausted { .. } => "CAPACITY_EXHAUSTED",
            TourError::Environment(_) => "ENVIRONMENT_ERROR",
            TourError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Offending field for configuration errors
    pub fn field(&self) -> Option<&str> {
        match self {
            TourError::Configuration { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        let mut payload = serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "retryable": self.is_retryable()
            }
        });

        if let Some(field) = self.field() {
            payload["error"]["field"] = serde_json::Value::String(field.to_string());
        }

        payload
    }
}
