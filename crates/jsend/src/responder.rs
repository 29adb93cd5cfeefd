use crate::builder::{build_error_body, ErrorInput};
use crate::envelope::{Envelope, ValidationMode};
use crate::validation::{ValidationError, Validator};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure reported by a [`ResponseSink`].
#[derive(Error, Debug)]
#[error("{message}")]
pub struct SinkError {
    pub message: String,
}

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("refusing to send unclassified envelope: {0}")]
    Unclassified(#[source] ValidationError),

    #[error("failed to serialize envelope: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("response sink rejected envelope: {0}")]
    Sink(#[from] SinkError),
}

/// The host framework's "set status, then write a JSON body" capability.
pub trait ResponseSink {
    fn send_json(&self, status: u16, body: Value) -> Result<(), SinkError>;
}

impl<S: ResponseSink + ?Sized> ResponseSink for &S {
    fn send_json(&self, status: u16, body: Value) -> Result<(), SinkError> {
        (**self).send_json(status, body)
    }
}

/// Per-request send helpers bound to one response sink.
///
/// Every method forwards to the sink at most once and never retries.
#[derive(Debug, Clone)]
pub struct Responder<S> {
    sink: S,
    validator: Validator,
}

impl<S: ResponseSink> Responder<S> {
    /// Classification always runs in lenient mode; only the compatibility
    /// switches of `validator` are kept.
    pub fn new(sink: S, validator: Validator) -> Self {
        Self {
            sink,
            validator: Validator::new(ValidationMode::Lenient, validator.compat()),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Sends an already-shaped envelope.
    ///
    /// Without an explicit status the variant's bucket is used: 200 for
    /// success, 400 for fail, 500 for error. A status of `0` counts as absent.
    /// The candidate is forwarded unchanged.
    pub fn send(&self, candidate: Value, status: Option<u16>) -> Result<(), SendError> {
        let classified = match self.validator.classify(&candidate) {
            Ok(status) => status,
            Err(e) if self.validator.compat().silent_unclassified_send => {
                warn!("Dropping unclassified envelope: {}", e);
                return Ok(());
            }
            Err(e) => return Err(SendError::Unclassified(e)),
        };

        let code = resolve_status(status, classified.default_http_status());
        self.forward(code, candidate)
    }

    pub fn send_success<T: Serialize>(
        &self,
        data: T,
        status: Option<u16>,
    ) -> Result<(), SendError> {
        self.send_envelope(Envelope::Success { data }, status)
    }

    pub fn send_fail<T: Serialize>(&self, data: T, status: Option<u16>) -> Result<(), SendError> {
        self.send_envelope(Envelope::Fail { data }, status)
    }

    pub fn send_error(
        &self,
        input: impl Into<ErrorInput>,
        status: Option<u16>,
    ) -> Result<(), SendError> {
        let body = build_error_body(input.into(), self.validator.compat().truthy_error_fields);
        self.send_envelope(Envelope::<Value>::Error(body), status)
    }

    /// Sends a typed envelope using its variant's default status bucket.
    pub fn send_envelope<T: Serialize>(
        &self,
        envelope: Envelope<T>,
        status: Option<u16>,
    ) -> Result<(), SendError> {
        let code = resolve_status(status, envelope.default_http_status());
        let body = envelope.to_value()?;
        self.forward(code, body)
    }

    fn forward(&self, status: u16, body: Value) -> Result<(), SendError> {
        debug!(status, "Forwarding JSend envelope");
        self.sink.send_json(status, body)?;
        Ok(())
    }
}

fn resolve_status(explicit: Option<u16>, default: u16) -> u16 {
    explicit.filter(|s| *s != 0).unwrap_or(default)
}
