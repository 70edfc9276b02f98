//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use folio_domain::error::{FolioError, SourceError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`FolioError`] to an HTTP response with appropriate status code.
pub struct ApiError(FolioError);

impl From<FolioError> for ApiError {
    fn from(err: FolioError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            FolioError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            FolioError::Parse(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            FolioError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            FolioError::Source(SourceError::Io(err))
                if err.kind() == std::io::ErrorKind::NotFound =>
            {
                (
                    StatusCode::NOT_FOUND,
                    "profile document not found".to_string(),
                )
            }
            FolioError::Source(err) => {
                tracing::error!(error = %err, "profile source error");
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            FolioError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
