use crate::envelope::{Compat, Envelope, ErrorBody, Status, ValidationMode};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Why a candidate value is not a JSend envelope.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("envelope must be a JSON object")]
    NotAnObject,

    #[error("envelope has no status key")]
    MissingStatus,

    #[error("envelope status must be a string")]
    StatusNotString,

    #[error("unknown envelope status: {0}")]
    UnknownStatus(String),

    #[error("{0} envelope has no data key")]
    MissingData(Status),

    #[error("error envelope has no message key")]
    MissingMessage,

    #[error("error envelope message must be a string")]
    MessageNotString,

    #[error("error envelope code must be a number")]
    CodeNotNumeric,

    #[error("{status} envelope has unexpected keys: {}", .keys.join(", "))]
    UnexpectedKeys { status: Status, keys: Vec<String> },
}

/// Checks arbitrary JSON values against the three envelope variants.
///
/// The mode and compatibility switches are fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    mode: ValidationMode,
    compat: Compat,
}

impl Validator {
    pub fn new(mode: ValidationMode, compat: Compat) -> Self {
        Self { mode, compat }
    }

    pub fn lenient() -> Self {
        Self::new(ValidationMode::Lenient, Compat::default())
    }

    pub fn strict() -> Self {
        Self::new(ValidationMode::Strict, Compat::default())
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn compat(&self) -> Compat {
        self.compat
    }

    /// Parses an untrusted value into a typed envelope.
    ///
    /// The returned envelope drops keys outside the variant's whitelist, which
    /// can only be present in lenient mode.
    pub fn parse(&self, candidate: &Value) -> Result<Envelope, ValidationError> {
        let result = self.parse_inner(candidate);
        if let Err(e) = &result {
            debug!(mode = ?self.mode, "rejected envelope candidate: {}", e);
        }
        result
    }

    fn parse_inner(&self, candidate: &Value) -> Result<Envelope, ValidationError> {
        let obj = candidate.as_object().ok_or(ValidationError::NotAnObject)?;

        let status = match obj.get("status") {
            None => return Err(ValidationError::MissingStatus),
            Some(Value::String(s)) => s
                .parse::<Status>()
                .map_err(ValidationError::UnknownStatus)?,
            Some(_) => return Err(ValidationError::StatusNotString),
        };

        let envelope = match status {
            Status::Success | Status::Fail => {
                let data = obj
                    .get("data")
                    .cloned()
                    .ok_or(ValidationError::MissingData(status))?;
                if status == Status::Success {
                    Envelope::Success { data }
                } else {
                    Envelope::Fail { data }
                }
            }
            Status::Error => Envelope::Error(self.parse_error_body(obj)?),
        };

        if self.mode == ValidationMode::Strict {
            check_whitelisted_keys(obj, status)?;
        }

        Ok(envelope)
    }

    fn parse_error_body(&self, obj: &Map<String, Value>) -> Result<ErrorBody, ValidationError> {
        let message = match obj.get("message") {
            None => return Err(ValidationError::MissingMessage),
            Some(Value::String(m)) => m.clone(),
            Some(_) => return Err(ValidationError::MessageNotString),
        };

        let code = match obj.get("code") {
            None => None,
            // The legacy check inspects `message`, which is a string by now.
            Some(_) if self.compat.legacy_code_check => {
                return Err(ValidationError::CodeNotNumeric);
            }
            Some(Value::Number(n)) => Some(n.clone()),
            Some(_) => return Err(ValidationError::CodeNotNumeric),
        };

        Ok(ErrorBody {
            message,
            code,
            data: obj.get("data").cloned(),
        })
    }

    pub fn is_success(&self, candidate: &Value) -> bool {
        matches!(self.parse_inner(candidate), Ok(Envelope::Success { .. }))
    }

    pub fn is_fail(&self, candidate: &Value) -> bool {
        matches!(self.parse_inner(candidate), Ok(Envelope::Fail { .. }))
    }

    pub fn is_error(&self, candidate: &Value) -> bool {
        matches!(self.parse_inner(candidate), Ok(Envelope::Error(_)))
    }

    pub fn is_valid(&self, candidate: &Value) -> bool {
        self.parse_inner(candidate).is_ok()
    }

    /// Tag of the variant the candidate matches, if any.
    pub fn classify(&self, candidate: &Value) -> Result<Status, ValidationError> {
        self.parse(candidate).map(|envelope| envelope.status())
    }
}

fn check_whitelisted_keys(obj: &Map<String, Value>, status: Status) -> Result<(), ValidationError> {
    let allowed = status.allowed_keys();
    let unexpected: Vec<String> = obj
        .keys()
        .filter(|k| !allowed.contains(&k.as_str()))
        .cloned()
        .collect();

    if unexpected.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::UnexpectedKeys {
            status,
            keys: unexpected,
        })
    }
}
