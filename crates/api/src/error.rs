//! Handler-level error type and its HTTP mapping.

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Db(#[from] db::DbError),

    /// The request body was missing, not JSON, or did not match the DTO.
    #[error(transparent)]
    Json(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Db(db::DbError::NotFound) => StatusCode::NOT_FOUND,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Json(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Db(db::DbError::NotFound) => "Transaction not found.".to_string(),
            Self::Json(rejection) => rejection.body_text(),
            Self::Db(_) => {
                tracing::error!(error = %self, "request failed");
                "An internal server error occurred.".to_string()
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// `Json` extractor whose rejections are reported as [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);
