//! Gumbel (maximum) distribution, also known as the type I extreme value
//! distribution.
//!
//! Parameterized by `[mu, beta]`, the location and the scale.
//!
//! - PDF: `(1/β) exp(-(z + e^{-z}))` with `z = (x - μ)/β`
//! - CDF: `exp(-e^{-z})`
//! - ICDF: `μ - β ln(-ln p)`
//!
//! # Bounds
//!
//! The distribution is right-skewed, so the numerical bounds are asymmetric:
//! `[mu - 3.6 beta, mu + 36 beta]`. Both tails beyond them hold less than
//! `1e-15` of probability mass.

use crate::prob_input::{
    error::InputError,
    registry::{check_arity, check_finite, check_positive, Family},
};

const LOWER_MULTIPLIER: f64 = 3.6;
const UPPER_MULTIPLIER: f64 = 36.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gumbel {
    mu: f64,
    beta: f64,
}

impl Gumbel {
    pub(crate) fn new(mu: f64, beta: f64) -> Self {
        Self { mu, beta }
    }

    #[inline]
    pub(crate) fn raw_pdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.beta;
        (-(z + (-z).exp())).exp() / self.beta
    }

    #[inline]
    pub(crate) fn raw_cdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.beta;
        (-(-z).exp()).exp()
    }

    #[inline]
    pub(crate) fn raw_icdf(&self, p: f64) -> f64 {
        self.mu - self.beta * (-p.ln()).ln()
    }
}

impl Family for Gumbel {
    const NAME: &'static str = "gumbel";
    const ALIASES: &'static [&'static str] = &["gumbel-max", "gumbel_r"];
    const ARITY: usize = 2;

    fn from_parameters(parameters: &[f64]) -> Result<Self, InputError> {
        check_arity(Self::NAME, parameters, Self::ARITY)?;
        check_finite(Self::NAME, parameters)?;
        check_positive(Self::NAME, parameters[1], "scale parameter beta")?;

        Ok(Self::new(parameters[0], parameters[1]))
    }

    fn bounds(&self) -> (f64, f64) {
        (
            self.mu - LOWER_MULTIPLIER * self.beta,
            self.mu + UPPER_MULTIPLIER * self.beta,
        )
    }

    fn density(&self, x: f64) -> f64 {
        self.raw_pdf(x)
    }

    fn probability(&self, x: f64) -> f64 {
        self.raw_cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        self.raw_icdf(p)
    }
}
