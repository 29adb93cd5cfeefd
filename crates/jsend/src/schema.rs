use crate::envelope::{Envelope, ValidationMode};
use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

const JSEND_SCHEMA: &str = include_str!("../../../contracts/envelopes/jsend.json");
const JSEND_STRICT_SCHEMA: &str = include_str!("../../../contracts/envelopes/jsend.strict.json");

/// Validates envelopes against the published JSON Schema contract.
pub struct SchemaValidator {
    mode: ValidationMode,
    schema: JSONSchema,
}

impl SchemaValidator {
    pub fn new(mode: ValidationMode) -> Result<Self> {
        let source = match mode {
            ValidationMode::Lenient => JSEND_SCHEMA,
            ValidationMode::Strict => JSEND_STRICT_SCHEMA,
        };

        let schema_value: Value = serde_json::from_str(source)
            .map_err(|e| anyhow!("Failed to parse JSend schema: {}", e))?;

        let schema = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&schema_value)
            .map_err(|e| anyhow!("Failed to compile JSend schema: {}", e))?;

        Ok(Self { mode, schema })
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn validate<T>(&self, envelope: &Envelope<T>) -> Result<()>
    where
        T: serde::Serialize,
    {
        let envelope_value = envelope
            .to_value()
            .map_err(|e| anyhow!("Failed to serialize envelope for validation: {}", e))?;

        self.validate_json(&envelope_value)
    }

    pub fn validate_json(&self, envelope_json: &Value) -> Result<()> {
        if let Err(errors) = self.schema.validate(envelope_json) {
            let error_messages: Vec<String> = errors
                .map(|error| format!("{} at {}", error, error.instance_path))
                .collect();

            return Err(anyhow!(
                "Envelope validation failed: {}",
                error_messages.join(", ")
            ));
        }

        Ok(())
    }

    pub fn is_valid(&self, envelope_json: &Value) -> bool {
        self.schema.is_valid(envelope_json)
    }
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
