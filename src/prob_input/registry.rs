//! Registry of univariate distribution families.
//!
//! Every supported family lives in its own module under
//! [`crate::prob_input::distributions`] and implements the [`Family`] trait.
//! The registry ties the families together through two closed enums:
//!
//! - [`DistributionKind`] identifies a family by name. Names are resolved
//!   case-insensitively and a small set of aliases is accepted
//!   (e.g. `N`, `gaussian` and `Normal` all resolve to `normal`).
//! - [`Distribution`] is a validated family instance bound to one parameter
//!   set. It exposes the bounded `pdf`, `cdf` and `icdf` used by marginals.
//!
//! # Adding a family
//!
//! 1. Create a module in `distributions/` with a struct implementing [`Family`].
//! 2. Add a variant to [`DistributionKind`] and [`Distribution`].
//! 3. Extend [`DistributionKind::ALL`] and the `dispatch!`/`build` arms.
//!
//! The alias table is generated from [`Family::NAME`] and [`Family::ALIASES`],
//! so no further registration is needed.
//!
//! # Bounds
//!
//! Downstream domain checks compare samples against the bounds of each
//! marginal, so bounds are always finite. Families with unbounded support
//! truncate it at a point where the neglected probability mass is below
//! roughly `1e-15`; the policy is documented on each family.

use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::distributions::{
    beta::Beta, exponential::Exponential, gumbel::Gumbel, logitnormal::LogitNormal,
    lognormal::LogNormal, normal::Normal, triangular::Triangular, trunc_gumbel::TruncGumbel,
    truncnormal::TruncNormal, uniform::Uniform,
};
use super::error::InputError;

/// Capability set of a univariate distribution family.
///
/// Implementors supply the raw density, distribution and quantile functions
/// of the family on its support. The provided methods add the bound handling
/// shared by all families:
///
/// - `pdf` is zero outside `[lower, upper]`
/// - `cdf` is zero below `lower` and one above `upper`
/// - `icdf` maps `0` and `1` onto the bounds and clamps into them
///
/// Probabilities outside `[0, 1]` are the caller's responsibility. They are
/// passed to [`Family::extrapolate`], which yields `NaN` unless a family
/// knows how to extend its quantile function.
pub trait Family: Sized {
    /// Canonical (lower-case) name of the family.
    const NAME: &'static str;
    /// Alternative names accepted by the registry.
    const ALIASES: &'static [&'static str];
    /// Number of parameters the family expects.
    const ARITY: usize;

    /// Validates the parameters and builds the family instance.
    fn from_parameters(parameters: &[f64]) -> Result<Self, InputError>;

    /// Finite numerical bounds `(lower, upper)`.
    fn bounds(&self) -> (f64, f64);

    fn density(&self, x: f64) -> f64;

    fn probability(&self, x: f64) -> f64;

    /// Quantile for `p` strictly inside `(0, 1)`.
    fn quantile(&self, p: f64) -> f64;

    fn extrapolate(&self, _p: f64) -> f64 {
        f64::NAN
    }

    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let (lower, upper) = self.bounds();
        if x < lower || x > upper {
            0.0
        } else {
            self.density(x)
        }
    }

    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let (lower, upper) = self.bounds();
        if x < lower {
            0.0
        } else if x > upper {
            1.0
        } else {
            self.probability(x).clamp(0.0, 1.0)
        }
    }

    #[inline]
    fn icdf(&self, p: f64) -> f64 {
        let (lower, upper) = self.bounds();
        if p.is_nan() {
            f64::NAN
        } else if p == 0.0 {
            lower
        } else if p == 1.0 {
            upper
        } else if !(0.0..=1.0).contains(&p) {
            self.extrapolate(p)
        } else {
            self.quantile(p).clamp(lower, upper)
        }
    }
}

/// Identifier of a supported distribution family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DistributionKind {
    Uniform,
    Normal,
    LogNormal,
    TruncNormal,
    Gumbel,
    TruncGumbel,
    Beta,
    Triangular,
    Exponential,
    LogitNormal,
}

lazy_static::lazy_static! {
    static ref NAME_MAPPINGS: HashMap<&'static str, DistributionKind> = {
        let mut m = HashMap::new();
        for kind in DistributionKind::ALL {
            m.insert(kind.name(), kind);
            for alias in kind.aliases() {
                m.insert(*alias, kind);
            }
        }
        m
    };
}

impl DistributionKind {
    pub const ALL: [DistributionKind; 10] = [
        DistributionKind::Uniform,
        DistributionKind::Normal,
        DistributionKind::LogNormal,
        DistributionKind::TruncNormal,
        DistributionKind::Gumbel,
        DistributionKind::TruncGumbel,
        DistributionKind::Beta,
        DistributionKind::Triangular,
        DistributionKind::Exponential,
        DistributionKind::LogitNormal,
    ];

    /// Canonical name of the family.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Uniform => Uniform::NAME,
            DistributionKind::Normal => Normal::NAME,
            DistributionKind::LogNormal => LogNormal::NAME,
            DistributionKind::TruncNormal => TruncNormal::NAME,
            DistributionKind::Gumbel => Gumbel::NAME,
            DistributionKind::TruncGumbel => TruncGumbel::NAME,
            DistributionKind::Beta => Beta::NAME,
            DistributionKind::Triangular => Triangular::NAME,
            DistributionKind::Exponential => Exponential::NAME,
            DistributionKind::LogitNormal => LogitNormal::NAME,
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            DistributionKind::Uniform => Uniform::ALIASES,
            DistributionKind::Normal => Normal::ALIASES,
            DistributionKind::LogNormal => LogNormal::ALIASES,
            DistributionKind::TruncNormal => TruncNormal::ALIASES,
            DistributionKind::Gumbel => Gumbel::ALIASES,
            DistributionKind::TruncGumbel => TruncGumbel::ALIASES,
            DistributionKind::Beta => Beta::ALIASES,
            DistributionKind::Triangular => Triangular::ALIASES,
            DistributionKind::Exponential => Exponential::ALIASES,
            DistributionKind::LogitNormal => LogitNormal::ALIASES,
        }
    }

    /// Number of parameters expected by the family.
    pub fn arity(&self) -> usize {
        match self {
            DistributionKind::Uniform => Uniform::ARITY,
            DistributionKind::Normal => Normal::ARITY,
            DistributionKind::LogNormal => LogNormal::ARITY,
            DistributionKind::TruncNormal => TruncNormal::ARITY,
            DistributionKind::Gumbel => Gumbel::ARITY,
            DistributionKind::TruncGumbel => TruncGumbel::ARITY,
            DistributionKind::Beta => Beta::ARITY,
            DistributionKind::Triangular => Triangular::ARITY,
            DistributionKind::Exponential => Exponential::ARITY,
            DistributionKind::LogitNormal => LogitNormal::ARITY,
        }
    }

    /// Validates `parameters` and binds them to this family.
    pub fn build(&self, parameters: &[f64]) -> Result<Distribution, InputError> {
        let distribution = match self {
            DistributionKind::Uniform => Distribution::Uniform(Uniform::from_parameters(parameters)?),
            DistributionKind::Normal => Distribution::Normal(Normal::from_parameters(parameters)?),
            DistributionKind::LogNormal => {
                Distribution::LogNormal(LogNormal::from_parameters(parameters)?)
            }
            DistributionKind::TruncNormal => {
                Distribution::TruncNormal(TruncNormal::from_parameters(parameters)?)
            }
            DistributionKind::Gumbel => Distribution::Gumbel(Gumbel::from_parameters(parameters)?),
            DistributionKind::TruncGumbel => {
                Distribution::TruncGumbel(TruncGumbel::from_parameters(parameters)?)
            }
            DistributionKind::Beta => Distribution::Beta(Beta::from_parameters(parameters)?),
            DistributionKind::Triangular => {
                Distribution::Triangular(Triangular::from_parameters(parameters)?)
            }
            DistributionKind::Exponential => {
                Distribution::Exponential(Exponential::from_parameters(parameters)?)
            }
            DistributionKind::LogitNormal => {
                Distribution::LogitNormal(LogitNormal::from_parameters(parameters)?)
            }
        };

        let (lower, upper) = distribution.bounds();
        check_span(self.name(), lower, upper)?;

        Ok(distribution)
    }

    /// Checks the parameters against the constraints of the family.
    pub fn validate_parameters(&self, parameters: &[f64]) -> Result<(), InputError> {
        self.build(parameters).map(|_| ())
    }

    /// Finite bounds of the family for the given parameters.
    pub fn bounds(&self, parameters: &[f64]) -> Result<(f64, f64), InputError> {
        self.build(parameters).map(|d| d.bounds())
    }
}

/// Resolves a distribution name (case-insensitive, aliases allowed).
///
/// # Errors
/// Returns [`InputError::UnsupportedDistribution`] for unknown names.
pub fn validate_distribution(name: &str) -> Result<DistributionKind, InputError> {
    let normalized = name.trim().to_lowercase();
    NAME_MAPPINGS
        .get(normalized.as_str())
        .copied()
        .ok_or(InputError::UnsupportedDistribution(normalized))
}

/// Canonical names of all supported families.
pub fn supported_distributions() -> Vec<&'static str> {
    DistributionKind::ALL.iter().map(|k| k.name()).collect()
}

impl FromStr for DistributionKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_distribution(s)
    }
}

impl TryFrom<String> for DistributionKind {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_distribution(&value)
    }
}

impl From<DistributionKind> for String {
    fn from(kind: DistributionKind) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A distribution family bound to a validated parameter set.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    Uniform(Uniform),
    Normal(Normal),
    LogNormal(LogNormal),
    TruncNormal(TruncNormal),
    Gumbel(Gumbel),
    TruncGumbel(TruncGumbel),
    Beta(Beta),
    Triangular(Triangular),
    Exponential(Exponential),
    LogitNormal(LogitNormal),
}

macro_rules! dispatch {
    ($self:expr, $dist:ident => $body:expr) => {
        match $self {
            Distribution::Uniform($dist) => $body,
            Distribution::Normal($dist) => $body,
            Distribution::LogNormal($dist) => $body,
            Distribution::TruncNormal($dist) => $body,
            Distribution::Gumbel($dist) => $body,
            Distribution::TruncGumbel($dist) => $body,
            Distribution::Beta($dist) => $body,
            Distribution::Triangular($dist) => $body,
            Distribution::Exponential($dist) => $body,
            Distribution::LogitNormal($dist) => $body,
        }
    };
}

impl Distribution {
    pub fn kind(&self) -> DistributionKind {
        match self {
            Distribution::Uniform(_) => DistributionKind::Uniform,
            Distribution::Normal(_) => DistributionKind::Normal,
            Distribution::LogNormal(_) => DistributionKind::LogNormal,
            Distribution::TruncNormal(_) => DistributionKind::TruncNormal,
            Distribution::Gumbel(_) => DistributionKind::Gumbel,
            Distribution::TruncGumbel(_) => DistributionKind::TruncGumbel,
            Distribution::Beta(_) => DistributionKind::Beta,
            Distribution::Triangular(_) => DistributionKind::Triangular,
            Distribution::Exponential(_) => DistributionKind::Exponential,
            Distribution::LogitNormal(_) => DistributionKind::LogitNormal,
        }
    }

    pub fn bounds(&self) -> (f64, f64) {
        dispatch!(self, d => d.bounds())
    }

    /// Density, zero outside the bounds.
    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        dispatch!(self, d => d.pdf(x))
    }

    /// Cumulative probability, saturating at the bounds.
    #[inline]
    pub fn cdf(&self, x: f64) -> f64 {
        dispatch!(self, d => d.cdf(x))
    }

    /// Inverse cumulative probability, clamped into the bounds.
    #[inline]
    pub fn icdf(&self, p: f64) -> f64 {
        dispatch!(self, d => d.icdf(p))
    }
}

/// Checks the number of parameters of a family.
pub(crate) fn check_arity(name: &str, parameters: &[f64], expected: usize) -> Result<(), InputError> {
    if parameters.len() != expected {
        return Err(InputError::invalid(
            name,
            format!(
                "requires exactly {} parameter{}, got {}",
                expected,
                if expected == 1 { "" } else { "s" },
                parameters.len()
            ),
        ));
    }
    Ok(())
}

pub(crate) fn check_finite(name: &str, parameters: &[f64]) -> Result<(), InputError> {
    if let Some((idx, value)) = parameters.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(InputError::invalid(
            name,
            format!("parameter {} must be finite, got {}", idx + 1, value),
        ));
    }
    Ok(())
}

pub(crate) fn check_positive(name: &str, value: f64, param_name: &str) -> Result<(), InputError> {
    if value <= 0.0 {
        return Err(InputError::invalid(
            name,
            format!("{param_name} must be positive, got {value}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_ordered(name: &str, lower: f64, upper: f64) -> Result<(), InputError> {
    if lower >= upper {
        return Err(InputError::invalid(
            name,
            format!("the lower bound {lower} must be smaller than the upper bound {upper}"),
        ));
    }
    Ok(())
}

/// Rejects bounds that overflow, either themselves or through their width.
pub(crate) fn check_span(name: &str, lower: f64, upper: f64) -> Result<(), InputError> {
    if !lower.is_finite() || !upper.is_finite() || !(upper - lower).is_finite() {
        return Err(InputError::invalid(
            name,
            format!("the bounds [{lower}, {upper}] are not finitely representable"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_canonical_names() {
        for kind in DistributionKind::ALL {
            assert_eq!(validate_distribution(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(
            validate_distribution("UnIfOrM").unwrap(),
            DistributionKind::Uniform
        );
        assert_eq!(
            validate_distribution("  Normal ").unwrap(),
            DistributionKind::Normal
        );
        assert_eq!(
            validate_distribution("N").unwrap(),
            DistributionKind::Normal
        );
        assert_eq!(
            validate_distribution("Gumbel-Truncated").unwrap(),
            DistributionKind::TruncGumbel
        );
        assert_eq!(
            validate_distribution("normal-truncated").unwrap(),
            DistributionKind::TruncNormal
        );
    }

    #[test]
    fn test_unknown_distribution() {
        let result = validate_distribution("Cauchy");
        assert_eq!(
            result,
            Err(InputError::UnsupportedDistribution("cauchy".to_string()))
        );
    }

    #[test]
    fn test_aliases_are_unique() {
        let total: usize = DistributionKind::ALL
            .iter()
            .map(|k| 1 + k.aliases().len())
            .sum();
        assert_eq!(NAME_MAPPINGS.len(), total);
    }

    #[test]
    fn test_arity_errors_name_the_family() {
        for kind in DistributionKind::ALL {
            let params = vec![0.5; kind.arity() + 1];
            match kind.validate_parameters(&params) {
                Err(InputError::InvalidParameters {
                    distribution,
                    message,
                }) => {
                    assert_eq!(distribution, kind.name());
                    assert!(message.contains("requires exactly"));
                }
                other => panic!("Expected InvalidParameters for {kind}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_finite_parameters() {
        let result = DistributionKind::Normal.validate_parameters(&[f64::NAN, 1.0]);
        assert!(matches!(result, Err(InputError::InvalidParameters { .. })));

        let result = DistributionKind::Uniform.validate_parameters(&[0.0, f64::INFINITY]);
        assert!(matches!(result, Err(InputError::InvalidParameters { .. })));
    }

    #[test]
    fn test_bounds_must_be_finite() {
        let result = DistributionKind::Normal.bounds(&[0.0, 1e308]);
        assert!(matches!(result, Err(InputError::InvalidParameters { .. })));

        let result = DistributionKind::Uniform.validate_parameters(&[-1e308, 1e308]);
        assert!(matches!(result, Err(InputError::InvalidParameters { .. })));

        let (lower, upper) = DistributionKind::Uniform.bounds(&[-1e307, 1e307]).unwrap();
        assert_eq!((lower, upper), (-1e307, 1e307));
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&DistributionKind::TruncGumbel).unwrap();
        assert_eq!(json, "\"trunc-gumbel\"");

        let kind: DistributionKind = serde_json::from_str("\"Gaussian\"").unwrap();
        assert_eq!(kind, DistributionKind::Normal);

        let result: Result<DistributionKind, _> = serde_json::from_str("\"cauchy\"");
        assert!(result.is_err());
    }
}
