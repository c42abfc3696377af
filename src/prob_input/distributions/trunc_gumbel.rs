//! Truncated Gumbel (maximum) distribution.
//!
//! Parameterized by `[mu, beta, lb, ub]`: the location and scale of the
//! parent Gumbel distribution and the truncation bounds.

use super::gumbel::Gumbel;
use crate::prob_input::{
    error::InputError,
    registry::{check_arity, check_finite, check_ordered, check_positive, Family},
};

#[derive(Debug, Clone, PartialEq)]
pub struct TruncGumbel {
    lb: f64,
    ub: f64,
    parent: Gumbel,
    cdf_lb: f64,
    mass: f64,
}

impl Family for TruncGumbel {
    const NAME: &'static str = "trunc-gumbel";
    const ALIASES: &'static [&'static str] = &["gumbel-truncated", "truncgumbel", "truncated-gumbel"];
    const ARITY: usize = 4;

    fn from_parameters(parameters: &[f64]) -> Result<Self, InputError> {
        check_arity(Self::NAME, parameters, Self::ARITY)?;
        check_finite(Self::NAME, parameters)?;

        let (mu, beta, lb, ub) = (parameters[0], parameters[1], parameters[2], parameters[3]);
        check_positive(Self::NAME, beta, "scale parameter beta")?;
        check_ordered(Self::NAME, lb, ub)?;

        let parent = Gumbel::new(mu, beta);
        let cdf_lb = parent.raw_cdf(lb);
        let mass = parent.raw_cdf(ub) - cdf_lb;
        if mass <= 0.0 {
            return Err(InputError::invalid(
                Self::NAME,
                format!("the bounds [{lb}, {ub}] carry no probability mass"),
            ));
        }

        Ok(Self {
            lb,
            ub,
            parent,
            cdf_lb,
            mass,
        })
    }

    fn bounds(&self) -> (f64, f64) {
        (self.lb, self.ub)
    }

    fn density(&self, x: f64) -> f64 {
        self.parent.raw_pdf(x) / self.mass
    }

    fn probability(&self, x: f64) -> f64 {
        (self.parent.raw_cdf(x) - self.cdf_lb) / self.mass
    }

    fn quantile(&self, p: f64) -> f64 {
        self.parent
            .raw_icdf((self.cdf_lb + p * self.mass).clamp(0.0, 1.0))
    }
}
