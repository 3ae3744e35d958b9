use actix_web::{error, http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::{ErrorResponse, ProfileError, ALL_FIELDS_REQUIRED};

/// Errors surfaced to HTTP clients as JSON
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

impl ApiError {
    fn body(&self) -> ErrorResponse {
        let status_code = self.status_code().as_u16();
        match self {
            ApiError::Profile(ProfileError::MissingFields(details)) => ErrorResponse {
                error: ALL_FIELDS_REQUIRED.to_string(),
                message: details.clone(),
                status_code,
            },
            ApiError::InvalidJson(details) => ErrorResponse {
                error: "invalid_json".to_string(),
                message: format!("Invalid JSON: {}", details),
                status_code,
            },
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_body() {
        let err = ApiError::from(ProfileError::MissingFields("companyAge is missing".to_string()));
        let body = err.body();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "All fields are required");
        assert_eq!(body.message, "companyAge is missing");
        assert_eq!(body.status_code, 400);
    }

    #[test]
    fn test_invalid_json_response() {
        let err = ApiError::InvalidJson("EOF while parsing".to_string());
        let response = err.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().error, "invalid_json");
        assert_eq!(err.body().message, "Invalid JSON: EOF while parsing");
    }
}
