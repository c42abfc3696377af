//! Logit-normal distribution.
//!
//! `X` is logit-normal when `logit(X) = ln(X / (1 - X))` is normal with mean
//! `mu` and standard deviation `sigma`. The support is `(0, 1)`.

use statrs::distribution::{Continuous, ContinuousCDF, Normal as NormalDist};

use crate::prob_input::{
    error::InputError,
    registry::{check_arity, check_finite, check_positive, Family},
};

#[inline]
fn logit(x: f64) -> f64 {
    (x / (1.0 - x)).ln()
}

#[inline]
fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogitNormal {
    inner: NormalDist,
}

impl Family for LogitNormal {
    const NAME: &'static str = "logitnormal";
    const ALIASES: &'static [&'static str] = &["logit-normal"];
    const ARITY: usize = 2;

    fn from_parameters(parameters: &[f64]) -> Result<Self, InputError> {
        check_arity(Self::NAME, parameters, Self::ARITY)?;
        check_finite(Self::NAME, parameters)?;
        check_positive(Self::NAME, parameters[1], "standard deviation of logit(X)")?;

        let inner = NormalDist::new(parameters[0], parameters[1])
            .map_err(|e| InputError::invalid(Self::NAME, e.to_string()))?;

        Ok(Self { inner })
    }

    fn bounds(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn density(&self, x: f64) -> f64 {
        if x <= 0.0 || x >= 1.0 {
            return 0.0;
        }
        self.inner.pdf(logit(x)) / (x * (1.0 - x))
    }

    fn probability(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            self.inner.cdf(logit(x))
        }
    }

    fn quantile(&self, p: f64) -> f64 {
        logistic(self.inner.inverse_cdf(p))
    }
}
