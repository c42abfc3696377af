//! Error types for probabilistic input models.
//!
//! Every failure in this crate is synchronous and final: a marginal or an
//! input model that fails validation is never constructed, and errors raised
//! while transforming or evaluating samples are returned to the caller
//! unchanged.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// The distribution name is not part of the registry.
    #[error("Univariate distribution '{0}' is not supported")]
    UnsupportedDistribution(String),

    /// The parameters violate a constraint of the distribution family.
    #[error("Invalid parameters for the {distribution} distribution: {message}")]
    InvalidParameters {
        distribution: String,
        message: String,
    },

    /// A value of the wrong kind was supplied where another was required.
    #[error("Expected {expected}, got {found}")]
    TypeMismatch { expected: String, found: String },

    /// The number of columns of a sample does not match the input dimension.
    #[error("Wrong dimensionality of the input array: expected {expected}, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// At least one sample value lies outside the declared domain.
    #[error("One or more values are outside the domain [{min}, {max}]")]
    DomainError { min: f64, max: f64 },

    /// The declared transform domain is empty or not finite.
    #[error("Invalid domain [{min}, {max}]: min. value must be smaller than max. value")]
    InvalidDomain { min: f64, max: f64 },

    #[error("Input dimension must be specified for an input model of variable dimension")]
    MissingDimension,

    #[error("Failed to parse marginal specification: {0}")]
    SpecParseError(String),
}

impl InputError {
    pub(crate) fn invalid(distribution: &str, message: impl Into<String>) -> Self {
        InputError::InvalidParameters {
            distribution: distribution.to_string(),
            message: message.into(),
        }
    }
}
