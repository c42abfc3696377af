//! Continuous uniform distribution.
//!
//! Parameterized by `[a, b]`, the lower and upper bounds of the support.
//! The density is `1 / (b - a)` on `[a, b]` and zero elsewhere.

use crate::prob_input::{
    error::InputError,
    registry::{check_arity, check_finite, check_ordered, Family},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    lower: f64,
    upper: f64,
}

impl Uniform {
    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }
}

impl Family for Uniform {
    const NAME: &'static str = "uniform";
    const ALIASES: &'static [&'static str] = &["unif", "u"];
    const ARITY: usize = 2;

    fn from_parameters(parameters: &[f64]) -> Result<Self, InputError> {
        check_arity(Self::NAME, parameters, Self::ARITY)?;
        check_finite(Self::NAME, parameters)?;
        check_ordered(Self::NAME, parameters[0], parameters[1])?;

        Ok(Self {
            lower: parameters[0],
            upper: parameters[1],
        })
    }

    fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    fn density(&self, _x: f64) -> f64 {
        1.0 / (self.upper - self.lower)
    }

    fn probability(&self, x: f64) -> f64 {
        (x - self.lower) / (self.upper - self.lower)
    }

    fn quantile(&self, p: f64) -> f64 {
        self.lower + (self.upper - self.lower) * p
    }

    /// The uniform quantile is affine, so it extends linearly beyond `[0, 1]`.
    fn extrapolate(&self, p: f64) -> f64 {
        self.quantile(p)
    }
}
