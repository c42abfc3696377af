//! Triangular distribution.
//!
//! Parameterized by `[a, b, c]`: the lower bound, the upper bound and the
//! mode, with `a < b` and `a <= c <= b`.

use statrs::distribution::{Continuous, ContinuousCDF, Triangular as TriangularDist};

use crate::prob_input::{
    error::InputError,
    registry::{check_arity, check_finite, check_ordered, Family},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Triangular {
    lower: f64,
    upper: f64,
    mode: f64,
    inner: TriangularDist,
}

impl Family for Triangular {
    const NAME: &'static str = "triangular";
    const ALIASES: &'static [&'static str] = &["tri"];
    const ARITY: usize = 3;

    fn from_parameters(parameters: &[f64]) -> Result<Self, InputError> {
        check_arity(Self::NAME, parameters, Self::ARITY)?;
        check_finite(Self::NAME, parameters)?;

        let (lower, upper, mode) = (parameters[0], parameters[1], parameters[2]);
        check_ordered(Self::NAME, lower, upper)?;
        if mode < lower || mode > upper {
            return Err(InputError::invalid(
                Self::NAME,
                format!("the mode {mode} must be between the bounds [{lower}, {upper}]"),
            ));
        }

        let inner = TriangularDist::new(lower, upper, mode)
            .map_err(|e| InputError::invalid(Self::NAME, e.to_string()))?;

        Ok(Self {
            lower,
            upper,
            mode,
            inner,
        })
    }

    fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    fn density(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn probability(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        let width = self.upper - self.lower;
        let p_mode = (self.mode - self.lower) / width;
        if p < p_mode {
            self.lower + (p * width * (self.mode - self.lower)).sqrt()
        } else {
            self.upper - ((1.0 - p) * width * (self.upper - self.mode)).sqrt()
        }
    }
}
