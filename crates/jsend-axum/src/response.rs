use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jsend::{Envelope, SendError};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

/// An envelope returned directly from a handler.
///
/// Without an explicit status the variant's default bucket is used.
#[derive(Debug, Clone)]
pub struct JSendJson<T = Value>(pub Envelope<T>, pub Option<StatusCode>);

impl<T> JSendJson<T> {
    pub fn with_status(envelope: Envelope<T>, status: StatusCode) -> Self {
        Self(envelope, Some(status))
    }

    pub fn status(&self) -> StatusCode {
        self.1.unwrap_or_else(|| {
            StatusCode::from_u16(self.0.default_http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        })
    }
}

impl<T> From<Envelope<T>> for JSendJson<T> {
    fn from(envelope: Envelope<T>) -> Self {
        Self(envelope, None)
    }
}

impl<T: Serialize> IntoResponse for JSendJson<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.0)).into_response()
    }
}

/// A [`SendError`] rendered as a 500 JSend error envelope.
#[derive(Debug)]
pub struct JSendFailure(pub SendError);

impl From<SendError> for JSendFailure {
    fn from(err: SendError) -> Self {
        Self(err)
    }
}

impl IntoResponse for JSendFailure {
    fn into_response(self) -> Response {
        error!("Failed to send JSend response: {}", self.0);

        let envelope: Envelope = jsend::error(self.0.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
    }
}
