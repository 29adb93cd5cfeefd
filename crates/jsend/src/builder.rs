use crate::envelope::{deserialize_present, ErrorBody, Envelope};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Message plus optional code and payload for an error envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub message: String,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<Number>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Value>,
}

impl ErrorDetails {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            data: None,
        }
    }

    pub fn code(mut self, code: impl Into<Number>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }
}

/// Either a bare message or full [`ErrorDetails`].
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorInput {
    Message(String),
    Details(ErrorDetails),
}

impl From<&str> for ErrorInput {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for ErrorInput {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<ErrorDetails> for ErrorInput {
    fn from(details: ErrorDetails) -> Self {
        Self::Details(details)
    }
}

/// Wraps `data` in a success envelope.
pub fn success<T>(data: T) -> Envelope<T> {
    Envelope::Success { data }
}

/// Wraps `data` in a fail envelope.
pub fn fail<T>(data: T) -> Envelope<T> {
    Envelope::Fail { data }
}

/// Builds an error envelope, keeping `code` and `data` whenever they were supplied.
pub fn error<T>(input: impl Into<ErrorInput>) -> Envelope<T> {
    Envelope::Error(build_error_body(input.into(), false))
}

/// Builds the body of an error envelope.
///
/// With `truthy_only`, supplied `code`/`data` values that are falsy
/// (`0`, `""`, `false`, `null`) are dropped from the result.
pub(crate) fn build_error_body(input: ErrorInput, truthy_only: bool) -> ErrorBody {
    match input {
        ErrorInput::Message(message) => ErrorBody::new(message),
        ErrorInput::Details(details) => {
            let code = if truthy_only {
                details.code.filter(number_is_truthy)
            } else {
                details.code
            };
            let data = if truthy_only {
                details.data.filter(is_truthy)
            } else {
                details.data
            };

            ErrorBody {
                message: details.message,
                code,
                data,
            }
        }
    }
}

fn number_is_truthy(n: &Number) -> bool {
    n.as_f64().map(|f| f != 0.0).unwrap_or(true)
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => number_is_truthy(n),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
