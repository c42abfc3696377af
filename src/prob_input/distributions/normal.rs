//! Normal (Gaussian) distribution.
//!
//! Parameterized by `[mu, sigma]`, the mean and the standard deviation.
//!
//! # Bounds
//!
//! The support is unbounded. Numerically it is cut at `mu ± 8.22 sigma`,
//! where the probability mass left outside is below `1e-15`.

use statrs::distribution::{Continuous, ContinuousCDF, Normal as NormalDist};

use crate::prob_input::{
    error::InputError,
    registry::{check_arity, check_finite, check_positive, Family},
};

/// Number of standard deviations between the mean and each numerical bound.
pub const TAIL_MULTIPLIER: f64 = 8.22;

#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
    inner: NormalDist,
}

impl Normal {
    pub fn mean(&self) -> f64 {
        self.mu
    }

    pub fn std_dev(&self) -> f64 {
        self.sigma
    }
}

impl Family for Normal {
    const NAME: &'static str = "normal";
    const ALIASES: &'static [&'static str] = &["gaussian", "n"];
    const ARITY: usize = 2;

    fn from_parameters(parameters: &[f64]) -> Result<Self, InputError> {
        check_arity(Self::NAME, parameters, Self::ARITY)?;
        check_finite(Self::NAME, parameters)?;
        check_positive(Self::NAME, parameters[1], "standard deviation")?;

        let inner = NormalDist::new(parameters[0], parameters[1])
            .map_err(|e| InputError::invalid(Self::NAME, e.to_string()))?;

        Ok(Self {
            mu: parameters[0],
            sigma: parameters[1],
            inner,
        })
    }

    fn bounds(&self) -> (f64, f64) {
        (
            self.mu - TAIL_MULTIPLIER * self.sigma,
            self.mu + TAIL_MULTIPLIER * self.sigma,
        )
    }

    fn density(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn probability(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        self.inner.inverse_cdf(p)
    }
}
