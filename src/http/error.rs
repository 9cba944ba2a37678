use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::error::TourError;

impl TourError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TourError::Configuration { .. } | TourError::Validation(_) => StatusCode::BAD_REQUEST,
            TourError::NotFound(_) => StatusCode::NOT_FOUND,
            TourError::RateLimit { .. } => StatusCode::TOO_MANY_REQUESTS,
            TourError::Delegate(_) => StatusCode::BAD_GATEWAY,
            TourError::DivisionDomain(_)
            | TourError::MalformedDuration(_)
            | TourError::CapacityExhausted { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            TourError::Parse(_) | TourError::Environment(_) | TourError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TourError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(target: "tour_agent::http", code = self.error_code(), error = %self);
        } else {
            warn!(target: "tour_agent::http", code = self.error_code(), error = %self);
        }
        (status, Json(self.to_error_payload())).into_response()
    }
}
