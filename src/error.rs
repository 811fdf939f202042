// src/error.rs

use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::Serialize;
use thiserror::Error;
//
use crate::store::StoreError;

pub const SERVER_ERROR_MESSAGE: &str = "Error en el servidor";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

/// Any failed store call. Callers only ever see a generic 500.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub StoreError);

impl From<mongodb::bson::ser::Error> for ApiError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self(StoreError::Encode(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "store operation failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error: SERVER_ERROR_MESSAGE }),
        )
            .into_response()
    }
}
