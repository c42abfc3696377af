//! Exponential distribution.
//!
//! Parameterized by `[lambda]`, the rate. The support `[0, ∞)` is cut at
//! `36.84 / lambda`, where `exp(-lambda x)` falls below `1e-16`.

use statrs::distribution::{Continuous, ContinuousCDF, Exp};

use crate::prob_input::{
    error::InputError,
    registry::{check_arity, check_finite, check_positive, Family},
};

const TAIL_MULTIPLIER: f64 = 36.84;

#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    rate: f64,
    inner: Exp,
}

impl Family for Exponential {
    const NAME: &'static str = "exponential";
    const ALIASES: &'static [&'static str] = &["exp", "e"];
    const ARITY: usize = 1;

    fn from_parameters(parameters: &[f64]) -> Result<Self, InputError> {
        check_arity(Self::NAME, parameters, Self::ARITY)?;
        check_finite(Self::NAME, parameters)?;
        check_positive(Self::NAME, parameters[0], "rate")?;

        let inner =
            Exp::new(parameters[0]).map_err(|e| InputError::invalid(Self::NAME, e.to_string()))?;

        Ok(Self {
            rate: parameters[0],
            inner,
        })
    }

    fn bounds(&self) -> (f64, f64) {
        (0.0, TAIL_MULTIPLIER / self.rate)
    }

    fn density(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn probability(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        -(-p).ln_1p() / self.rate
    }
}
