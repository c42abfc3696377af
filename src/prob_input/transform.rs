//! Isoprobabilistic transforms between a canonical uniform domain and the
//! native domain of a probabilistic input.
//!
//! A sample drawn uniformly on `[min, max]^M` is mapped onto an input model
//! column by column: each column goes through the CDF of a uniform marginal
//! on `[min, max]` and then through the inverse CDF of the target marginal.
//! The helpers here build the canonical input and check the shape and the
//! range of samples before any transform is applied.

use ndarray::{ArrayBase, Data, Ix2};
use serde::{Deserialize, Serialize};

use super::{error::InputError, marginal::Marginal, multivariate::ProbInput};

/// Bounds of the canonical uniform domain, `[-1, 1]` by default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformDomain {
    pub min: f64,
    pub max: f64,
}

impl UniformDomain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The unit hypercube `[0, 1]`.
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Checks that the domain is finite and non-empty.
    ///
    /// # Errors
    /// Returns [`InputError::InvalidDomain`] unless `min < max`.
    pub fn validate(&self) -> Result<(), InputError> {
        if !(self.min.is_finite() && self.max.is_finite()) || self.min >= self.max {
            return Err(InputError::InvalidDomain {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, x: f64) -> bool {
        (self.min..=self.max).contains(&x)
    }
}

impl Default for UniformDomain {
    fn default() -> Self {
        Self::new(-1.0, 1.0)
    }
}

/// Builds an independent uniform input on `[min, max]^dimension` with
/// marginals named `X1`, `X2`, ...
pub fn create_canonical_uniform_input(
    dimension: usize,
    domain: &UniformDomain,
) -> Result<ProbInput, InputError> {
    domain.validate()?;

    let marginals = (1..=dimension)
        .map(|i| {
            Marginal::builder()
                .distribution("uniform")
                .parameters(vec![domain.min, domain.max])
                .name(format!("X{i}"))
                .build()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProbInput::builder()
        .marginals(marginals)
        .name("Canonical uniform input")
        .build())
}

/// Checks that a sample has `dimension` columns.
pub fn verify_sample_shape<S>(xx: &ArrayBase<S, Ix2>, dimension: usize) -> Result<(), InputError>
where
    S: Data<Elem = f64>,
{
    if xx.ncols() != dimension {
        return Err(InputError::DimensionMismatch {
            expected: dimension,
            found: xx.ncols(),
        });
    }
    Ok(())
}

/// Checks that every value of a sample lies in `[min, max]`. `NaN` never does.
pub fn verify_sample_domain<S>(xx: &ArrayBase<S, Ix2>, domain: &UniformDomain) -> Result<(), InputError>
where
    S: Data<Elem = f64>,
{
    if xx.iter().any(|&x| !domain.contains(x)) {
        return Err(InputError::DomainError {
            min: domain.min,
            max: domain.max,
        });
    }
    Ok(())
}
