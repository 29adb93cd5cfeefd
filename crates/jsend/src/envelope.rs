use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// A JSend response envelope, tagged on the `status` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T = Value> {
    /// All went well, and (usually) some data was returned.
    Success { data: T },
    /// The request was rejected because of invalid input or a precondition.
    Fail { data: T },
    /// Processing failed on the server side.
    Error(ErrorBody),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
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

/// The `status` tag of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
    Error,
}

/// How strictly a candidate object is matched against a variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Unrecognized keys are ignored.
    #[default]
    Lenient,
    /// Any key outside the variant's whitelist rejects the candidate.
    Strict,
}

/// Switches that re-enable legacy JSend behaviours for parity testing.
///
/// Every flag defaults to `false`, which selects the corrected behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Compat {
    /// When `code` is present, type-check `message` as a number instead of `code`.
    /// Since `message` must already be a string, this rejects every error
    /// envelope that carries a code.
    pub legacy_code_check: bool,
    /// Drop falsy `code`/`data` values (`0`, `""`, `false`, `null`) when
    /// building an error envelope.
    pub truthy_error_fields: bool,
    /// Make `Responder::send` return `Ok(())` without forwarding when the
    /// candidate matches no variant.
    pub silent_unclassified_send: bool,
}

impl Compat {
    pub fn legacy() -> Self {
        Self {
            legacy_code_check: true,
            truthy_error_fields: true,
            silent_unclassified_send: true,
        }
    }
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Fail => "fail",
            Status::Error => "error",
        }
    }

    /// Default HTTP status bucket for the variant.
    pub fn default_http_status(&self) -> u16 {
        match self {
            Status::Success => 200,
            Status::Fail => 400,
            Status::Error => 500,
        }
    }

    /// Keys a candidate with this tag may carry in strict mode.
    pub fn allowed_keys(&self) -> &'static [&'static str] {
        match self {
            Status::Success | Status::Fail => &["status", "data"],
            Status::Error => &["status", "message", "code", "data"],
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Status::Success),
            "fail" => Ok(Status::Fail),
            "error" => Ok(Status::Error),
            other => Err(other.to_string()),
        }
    }
}

impl<T> Envelope<T> {
    pub fn status(&self) -> Status {
        match self {
            Self::Success { .. } => Status::Success,
            Self::Fail { .. } => Status::Fail,
            Self::Error(_) => Status::Error,
        }
    }

    pub fn default_http_status(&self) -> u16 {
        self.status().default_http_status()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Payload of a success or fail envelope.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } | Self::Fail { data } => Some(data),
            Self::Error(_) => None,
        }
    }

    pub fn error_body(&self) -> Option<&ErrorBody> {
        match self {
            Self::Error(body) => Some(body),
            _ => None,
        }
    }
}

impl<T: Serialize> Envelope<T> {
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            data: None,
        }
    }
}

// Keeps an explicit `null` as `Some(Value::Null)`; a missing key falls back to
// the field default.
pub(crate) fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
