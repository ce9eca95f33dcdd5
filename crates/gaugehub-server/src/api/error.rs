//! HTTP mapping for registry errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use gaugehub_core::error::{ClientCode, GaugeHubError};
use gaugehub_core::protocol::ErrorBody;

/// Registry error carried to the HTTP boundary.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub GaugeHubError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::AlreadyExists => StatusCode::CONFLICT,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::InvalidValue
            | ClientCode::InvalidName
            | ClientCode::BadRequest
            | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            tracing::error!(error = %self.0, "registry failure");
        }
        (self.status(), Json(ErrorBody::from(&self.0))).into_response()
    }
}
