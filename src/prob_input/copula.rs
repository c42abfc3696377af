//! Dependence structures joining the marginals of a [`ProbInput`](super::multivariate::ProbInput).

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Dependence structure of a multivariate input.
///
/// Every joint operation of [`ProbInput`](super::multivariate::ProbInput)
/// matches on this enum, so a new dependence structure is added as a new
/// variant together with its sampling, density and transform arms.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Copula {
    /// Mutually independent marginals.
    #[default]
    Independent,
}

impl fmt::Display for Copula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Copula::Independent => write!(f, "Independent"),
        }
    }
}
