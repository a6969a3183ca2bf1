use super::error::Message;
use axum::{
    async_trait,
    body::{Bytes, HttpBody},
    extract::{FromRequest, FromRequestParts, Json as AxumJson, Path as AxumPath},
    http::{header, request::Parts, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    BoxError,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_valid::Validate;
use thiserror::Error;

/// JSON body that is deserialized with field paths in its errors and
/// validated before it reaches a handler.
pub struct Json<T>(pub T);

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("Invalid mime type, expected application/json")]
    Mime,
    #[error("Could not read body bytes: {}", .0)]
    BodyRead(#[from] axum::extract::rejection::BytesRejection),
    #[error("Invalid JSON structure: {}", .0)]
    Data(String),
    #[error("Invalid JSON syntax: {}", .0)]
    Syntax(String),
    #[error("Invalid field value: {}", .0)]
    Invalid(String),
    #[error("IO error")]
    Io,
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        let status = match self {
            JsonError::Io | JsonError::BodyRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
            JsonError::Mime
            | JsonError::Syntax(_)
            | JsonError::Data(_)
            | JsonError::Invalid(_) => StatusCode::BAD_REQUEST,
        };
        tracing::debug!(error = %self, %status, "Rejected request body");
        (status, AxumJson(Message::new(self.to_string()))).into_response()
    }
}

#[async_trait]
impl<S, B, T> FromRequest<S, B> for Json<T>
where
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = JsonError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        if !json_content_type(req.headers()) {
            return Err(JsonError::Mime);
        }
        let bytes = Bytes::from_request(req, state).await?;
        let deserializer = &mut serde_json::Deserializer::from_slice(&bytes);

        let value: T = match serde_path_to_error::deserialize(deserializer) {
            Ok(value) => value,
            Err(err) => {
                let rejection = match err.inner().classify() {
                    serde_json::error::Category::Data => JsonError::Data(err.to_string()),
                    serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
                        JsonError::Syntax(err.to_string())
                    }
                    serde_json::error::Category::Io => JsonError::Io,
                };
                return Err(rejection);
            }
        };
        value
            .validate()
            .map_err(|e| JsonError::Invalid(e.to_string()))?;

        Ok(Json(value))
    }
}

fn json_content_type(headers: &HeaderMap) -> bool {
    let content_type = if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        content_type
    } else {
        return false;
    };

    let content_type = if let Ok(content_type) = content_type.to_str() {
        content_type
    } else {
        return false;
    };

    let mime = if let Ok(mime) = content_type.parse::<mime::Mime>() {
        mime
    } else {
        return false;
    };

    mime.type_() == "application"
        && (mime.subtype() == "json" || mime.suffix().map_or(false, |suffix| suffix == "json"))
}

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

pub struct Path<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AxumPath(t) = AxumPath::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                (
                    StatusCode::NOT_FOUND,
                    AxumJson(Message::new(format!("Invalid URL path: {}", e))),
                )
                    .into_response()
            })?;
        Ok(Self(t))
    }
}
