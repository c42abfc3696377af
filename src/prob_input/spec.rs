//! Plain specification records for marginals and probabilistic inputs.
//!
//! Specifications carry no validation of their own. They are turned into
//! validated objects through [`Marginal::from_spec`](super::marginal::Marginal::from_spec)
//! and [`ProbInput::from_spec`](super::multivariate::ProbInput::from_spec),
//! which route every marginal through the same constructor.
//!
//! A [`MarginalSpec`] can also be parsed from a compact string:
//!
//! ```
//! use uqtestfuns::prob_input::spec::MarginalSpec;
//!
//! let spec: MarginalSpec = "rw ~ Normal(0.10, 0.0161812)".parse().unwrap();
//! assert_eq!(spec.distribution, "normal");
//! assert_eq!(spec.parameters, vec![0.10, 0.0161812]);
//! assert_eq!(spec.name.as_deref(), Some("rw"));
//! ```

use std::str::FromStr;

use derive_builder::Builder;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{copula::Copula, error::InputError};

const MARGINAL_PATTERN: &str =
    r"^(?:([A-Za-z_][A-Za-z0-9_]*)\s*~\s*)?([A-Za-z][A-Za-z_-]*)\s*\(\s*([^)]*)\s*\)$";

/// Specification of a univariate marginal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Builder)]
pub struct MarginalSpec {
    /// Name of the distribution family (case-insensitive, aliases allowed).
    #[builder(setter(into))]
    pub distribution: String,

    /// Parameters of the distribution, in the order of the family.
    #[builder(setter(into))]
    pub parameters: Vec<f64>,

    /// Name of the random variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,

    /// Description of the random variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
}

impl MarginalSpec {
    fn parse_parameters(params_str: &str) -> Result<Vec<f64>, InputError> {
        if params_str.trim().is_empty() {
            return Ok(Vec::new());
        }

        params_str
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                InputError::SpecParseError(format!(
                    "Failed to parse parameters '{params_str}': {e}"
                ))
            })
    }
}

impl FromStr for MarginalSpec {
    type Err = InputError;

    /// Parses `"Family(p1, p2, ...)"` with an optional `"name ~ "` prefix.
    ///
    /// The family name is lower-cased but not resolved; unknown families are
    /// reported when the record is turned into a marginal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let pattern = Regex::new(MARGINAL_PATTERN)
            .map_err(|e| InputError::SpecParseError(format!("Regex compilation error: {e}")))?;
        let captures = pattern.captures(s).ok_or_else(|| {
            InputError::SpecParseError(format!(
                "Invalid format: '{s}'. Use '[name ~ ]DistributionName(param1, param2, ...)'"
            ))
        })?;

        Ok(MarginalSpec {
            distribution: captures[2].to_lowercase(),
            parameters: Self::parse_parameters(&captures[3])?,
            name: captures.get(1).map(|m| m.as_str().to_string()),
            description: None,
        })
    }
}

/// Specification of a probabilistic input of fixed dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct ProbInputSpec {
    /// Name of the probabilistic input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,

    /// Description of the probabilistic input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,

    /// Marginals in input order.
    #[builder(default, setter(into, each(name = "to_marginals")))]
    pub marginals: Vec<MarginalSpec>,

    /// Dependence structure between the marginals.
    #[serde(default)]
    #[builder(default)]
    pub copula: Copula,
}

/// Specification of a probabilistic input whose dimension is chosen on
/// construction.
///
/// The marginals are produced by a generator taking the requested dimension.
#[derive(Debug, Clone)]
pub struct ProbInputSpecVarDim {
    pub name: Option<String>,
    pub description: Option<String>,
    pub marginals_generator: fn(usize) -> Vec<MarginalSpec>,
    pub copula: Copula,
}

impl ProbInputSpecVarDim {
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        marginals_generator: fn(usize) -> Vec<MarginalSpec>,
    ) -> Self {
        Self {
            name,
            description,
            marginals_generator,
            copula: Copula::Independent,
        }
    }

    /// Fixes the dimension and returns the corresponding fixed spec.
    ///
    /// # Errors
    /// Returns [`InputError::DimensionMismatch`] when the generator does not
    /// yield `dimension` marginals.
    pub fn fix_dimension(&self, dimension: usize) -> Result<ProbInputSpec, InputError> {
        let marginals = (self.marginals_generator)(dimension);
        if marginals.len() != dimension {
            return Err(InputError::DimensionMismatch {
                expected: dimension,
                found: marginals.len(),
            });
        }

        Ok(ProbInputSpec {
            name: self.name.clone(),
            description: self.description.clone(),
            marginals,
            copula: self.copula,
        })
    }
}
