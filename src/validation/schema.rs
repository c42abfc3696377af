//! JSON schema validation of probabilistic input specifications.
//!
//! The schema is derived from [`ProbInputSpec`] with `schemars` and checked
//! with `jsonschema`. Only the structure of the document is validated here;
//! family names and parameter constraints are checked when the specification
//! is turned into a [`ProbInput`](crate::prob_input::multivariate::ProbInput).

use std::{error::Error, fmt};

use colored::Colorize;
use jsonschema::validator_for;
use schemars::schema_for;
use serde_json::Value;

use crate::prob_input::spec::ProbInputSpec;

/// Report containing validation results
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ValidationReport {
    /// Whether the document is valid
    pub valid: bool,
    /// List of validation errors if any
    pub errors: Vec<ValidationError>,
}

/// Individual validation error details
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ValidationError {
    /// JSON path where the error occurred
    pub location: String,
    /// Description of the validation error
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n\t└── {}",
            self.location.bold(),
            self.message.bold().red()
        )
    }
}

/// Validates a JSON document against the schema of [`ProbInputSpec`].
///
/// # Errors
/// Fails when `content` is not JSON at all or the schema cannot be compiled.
/// Schema violations are reported in the returned [`ValidationReport`].
pub fn validate_spec_json(content: &str) -> Result<ValidationReport, Box<dyn Error>> {
    let json: Value = serde_json::from_str(content)?;
    let schema = serde_json::to_value(schema_for!(ProbInputSpec))?;
    let validator = validator_for(&schema)?;

    let errors: Vec<ValidationError> = validator
        .iter_errors(&json)
        .map(|error| ValidationError {
            location: error.instance_path.to_string(),
            message: error.to_string().replace('"', "'"),
        })
        .collect();

    Ok(ValidationReport {
        valid: errors.is_empty(),
        errors,
    })
}
