use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::repository;

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::DbErr(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<repository::Error> for Error {
    fn from(value: repository::Error) -> Self {
        match value {
            repository::Error::NotFound { .. } | repository::Error::MissingReference { .. } => {
                Error::NotFound(value.to_string())
            }
            repository::Error::Db(e) => Error::DbErr(e),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }
        (status, Json(Message::new(self.to_string()))).into_response()
    }
}
