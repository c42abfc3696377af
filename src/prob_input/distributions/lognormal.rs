//! Log-normal distribution.
//!
//! Parameterized by `[mu, sigma]`, the mean and standard deviation of the
//! underlying normal distribution of `ln(X)`. The support starts at zero and
//! is cut numerically at `exp(mu + 8.22 sigma)`.
//!
//! Quantiles are computed through the normal distribution of `ln(X)`.

use statrs::distribution::{
    Continuous, ContinuousCDF, LogNormal as LogNormalDist, Normal as NormalDist,
};

use super::normal::TAIL_MULTIPLIER;
use crate::prob_input::{
    error::InputError,
    registry::{check_arity, check_finite, check_positive, Family},
};

#[derive(Debug, Clone, PartialEq)]
pub struct LogNormal {
    mu: f64,
    sigma: f64,
    inner: LogNormalDist,
    log_normal: NormalDist,
}

impl Family for LogNormal {
    const NAME: &'static str = "lognormal";
    const ALIASES: &'static [&'static str] = &["logn", "ln", "log-normal"];
    const ARITY: usize = 2;

    fn from_parameters(parameters: &[f64]) -> Result<Self, InputError> {
        check_arity(Self::NAME, parameters, Self::ARITY)?;
        check_finite(Self::NAME, parameters)?;
        check_positive(Self::NAME, parameters[1], "standard deviation of ln(X)")?;

        let upper = (parameters[0] + TAIL_MULTIPLIER * parameters[1]).exp();
        if !upper.is_finite() {
            return Err(InputError::invalid(
                Self::NAME,
                format!(
                    "upper bound exp({}) overflows",
                    parameters[0] + TAIL_MULTIPLIER * parameters[1]
                ),
            ));
        }

        let inner = LogNormalDist::new(parameters[0], parameters[1])
            .map_err(|e| InputError::invalid(Self::NAME, e.to_string()))?;
        let log_normal = NormalDist::new(parameters[0], parameters[1])
            .map_err(|e| InputError::invalid(Self::NAME, e.to_string()))?;

        Ok(Self {
            mu: parameters[0],
            sigma: parameters[1],
            inner,
            log_normal,
        })
    }

    fn bounds(&self) -> (f64, f64) {
        (0.0, (self.mu + TAIL_MULTIPLIER * self.sigma).exp())
    }

    fn density(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.inner.pdf(x)
    }

    fn probability(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        self.log_normal.inverse_cdf(p).exp()
    }
}
