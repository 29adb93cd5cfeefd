use crate::builder::{build_error_body, ErrorInput};
use crate::config::JSendConfig;
use crate::envelope::{Compat, Envelope, ValidationMode};
use crate::responder::{ResponseSink, Responder};
use crate::validation::{ValidationError, Validator};
use serde_json::Value;

/// Builder, validator and responder factory sharing one configuration.
///
/// Bundles are plain values: create as many as needed, there is no global
/// instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JSend {
    config: JSendConfig,
}

impl JSend {
    pub fn new(config: JSendConfig) -> Self {
        Self { config }
    }

    pub fn lenient() -> Self {
        Self::new(JSendConfig::lenient())
    }

    pub fn strict() -> Self {
        Self::new(JSendConfig::strict())
    }

    pub fn with_compat(mut self, compat: Compat) -> Self {
        self.config.compat = compat;
        self
    }

    pub fn config(&self) -> JSendConfig {
        self.config
    }

    pub fn mode(&self) -> ValidationMode {
        self.config.mode
    }

    pub fn validator(&self) -> Validator {
        Validator::new(self.config.mode, self.config.compat)
    }

    pub fn success<T>(&self, data: T) -> Envelope<T> {
        Envelope::Success { data }
    }

    pub fn fail<T>(&self, data: T) -> Envelope<T> {
        Envelope::Fail { data }
    }

    pub fn error<T>(&self, input: impl Into<ErrorInput>) -> Envelope<T> {
        Envelope::Error(build_error_body(
            input.into(),
            self.config.compat.truthy_error_fields,
        ))
    }

    pub fn parse(&self, candidate: &Value) -> Result<Envelope, ValidationError> {
        self.validator().parse(candidate)
    }

    pub fn is_success(&self, candidate: &Value) -> bool {
        self.validator().is_success(candidate)
    }

    pub fn is_fail(&self, candidate: &Value) -> bool {
        self.validator().is_fail(candidate)
    }

    pub fn is_error(&self, candidate: &Value) -> bool {
        self.validator().is_error(candidate)
    }

    pub fn is_valid(&self, candidate: &Value) -> bool {
        self.validator().is_valid(candidate)
    }

    /// Binds send helpers to a per-request response sink.
    pub fn responder<S: ResponseSink>(&self, sink: S) -> Responder<S> {
        Responder::new(sink, self.validator())
    }
}

impl From<JSendConfig> for JSend {
    fn from(config: JSendConfig) -> Self {
        Self::new(config)
    }
}
