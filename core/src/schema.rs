//! JSON Schema validation of response bodies.
//!
//! Validation is entirely the `jsonschema` crate's; this wrapper only compiles
//! the schema once and collects the library's messages into `SchemaError`.

use std::path::Path;

use serde_json::Value;

use crate::error::SchemaError;
use crate::fixtures;

/// A compiled schema, reusable across many instances.
pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    pub fn new(schema: &Value) -> Result<Self, SchemaError> {
        let validator =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::InvalidSchema(e.to_string()))?;
        Ok(Self { validator })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        Self::new(&fixtures::load_json(path)?)
    }

    /// Schema stored under `test-data/`.
    pub fn from_fixture(name: &str) -> Result<Self, SchemaError> {
        Self::from_file(fixtures::fixture_path(name))
    }

    pub fn validate(&self, instance: &Value) -> Result<(), SchemaError> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(instance)
            .map(|e| e.to_string())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Violations { errors })
        }
    }

    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }
}
