use crate::error::CarsError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

const INTERNAL_MESSAGE: &str = "Internal server error";

impl CarsError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AlreadyExists { .. } | Self::Conflict { .. } => StatusCode::ALREADY_REPORTED,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Plain-text body with the client message; details stay in the logs.
impl IntoResponse for CarsError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Validation { .. } => warn!(status = status.as_u16(), "{self}"),
            _ => error!(status = status.as_u16(), "{self}"),
        }

        let body = match &self {
            Self::Internal { .. } => INTERNAL_MESSAGE.to_owned(),
            other => other.message().to_owned(),
        };
        (status, body).into_response()
    }
}
