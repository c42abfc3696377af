//! Four-parameter Beta distribution.
//!
//! Parameterized by `[r, s, a, b]`: the two shape parameters and the lower
//! and upper bounds of the support. The standard Beta distribution on
//! `[0, 1]` is shifted and scaled onto `[a, b]`.

use statrs::distribution::{Beta as BetaDist, Continuous, ContinuousCDF};

use crate::prob_input::{
    error::InputError,
    registry::{check_arity, check_finite, check_ordered, check_positive, Family},
};

const MAX_POLISH_STEPS: usize = 64;
const POLISH_TOLERANCE: f64 = 1e-15;

#[derive(Debug, Clone, PartialEq)]
pub struct Beta {
    lower: f64,
    upper: f64,
    inner: BetaDist,
}

impl Beta {
    #[inline]
    fn to_unit(&self, x: f64) -> f64 {
        (x - self.lower) / (self.upper - self.lower)
    }

    /// Standard Beta quantile, polished with safeguarded Newton steps.
    fn unit_quantile(&self, p: f64) -> f64 {
        let mut x = self.inner.inverse_cdf(p).clamp(0.0, 1.0);
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);

        for _ in 0..MAX_POLISH_STEPS {
            let residual = self.inner.cdf(x) - p;
            if residual.abs() <= POLISH_TOLERANCE * p || hi - lo <= f64::EPSILON * x {
                break;
            }
            if residual > 0.0 {
                hi = x;
            } else {
                lo = x;
            }

            let density = self.inner.pdf(x);
            let candidate = x - residual / density;
            x = if density.is_finite() && density > 0.0 && candidate > lo && candidate < hi {
                candidate
            } else {
                0.5 * (lo + hi)
            };
        }

        x
    }
}

impl Family for Beta {
    const NAME: &'static str = "beta";
    const ALIASES: &'static [&'static str] = &[];
    const ARITY: usize = 4;

    fn from_parameters(parameters: &[f64]) -> Result<Self, InputError> {
        check_arity(Self::NAME, parameters, Self::ARITY)?;
        check_finite(Self::NAME, parameters)?;
        check_positive(Self::NAME, parameters[0], "shape parameter r")?;
        check_positive(Self::NAME, parameters[1], "shape parameter s")?;
        check_ordered(Self::NAME, parameters[2], parameters[3])?;

        let inner = BetaDist::new(parameters[0], parameters[1])
            .map_err(|e| InputError::invalid(Self::NAME, e.to_string()))?;

        Ok(Self {
            lower: parameters[2],
            upper: parameters[3],
            inner,
        })
    }

    fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    fn density(&self, x: f64) -> f64 {
        self.inner.pdf(self.to_unit(x)) / (self.upper - self.lower)
    }

    fn probability(&self, x: f64) -> f64 {
        self.inner.cdf(self.to_unit(x))
    }

    fn quantile(&self, p: f64) -> f64 {
        self.lower + (self.upper - self.lower) * self.unit_quantile(p)
    }
}
