//! Truncated normal distribution.
//!
//! Parameterized by `[mu, sigma, lb, ub]`: the mean and standard deviation of
//! the parent normal distribution and the truncation bounds. The mean must
//! lie strictly inside `(lb, ub)`.
//!
//! With `F` the parent CDF and `Z = F(ub) - F(lb)`:
//!
//! - PDF: `f(x) / Z`
//! - CDF: `(F(x) - F(lb)) / Z`
//! - ICDF: `F⁻¹(F(lb) + p·Z)`

use statrs::distribution::{Continuous, ContinuousCDF, Normal as NormalDist};

use crate::prob_input::{
    error::InputError,
    registry::{check_arity, check_finite, check_ordered, check_positive, Family},
};

#[derive(Debug, Clone, PartialEq)]
pub struct TruncNormal {
    lb: f64,
    ub: f64,
    parent: NormalDist,
    cdf_lb: f64,
    mass: f64,
}

impl Family for TruncNormal {
    const NAME: &'static str = "truncnormal";
    const ALIASES: &'static [&'static str] = &["trunc-normal", "normal-truncated", "truncated-normal"];
    const ARITY: usize = 4;

    fn from_parameters(parameters: &[f64]) -> Result<Self, InputError> {
        check_arity(Self::NAME, parameters, Self::ARITY)?;
        check_finite(Self::NAME, parameters)?;

        let (mu, sigma, lb, ub) = (parameters[0], parameters[1], parameters[2], parameters[3]);
        check_positive(Self::NAME, sigma, "standard deviation")?;
        check_ordered(Self::NAME, lb, ub)?;
        if mu <= lb || mu >= ub {
            return Err(InputError::invalid(
                Self::NAME,
                format!("the mean {mu} must be between the bounds [{lb}, {ub}]"),
            ));
        }

        let parent = NormalDist::new(mu, sigma)
            .map_err(|e| InputError::invalid(Self::NAME, e.to_string()))?;
        let cdf_lb = parent.cdf(lb);
        let mass = parent.cdf(ub) - cdf_lb;
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
        self.parent.pdf(x) / self.mass
    }

    fn probability(&self, x: f64) -> f64 {
        (self.parent.cdf(x) - self.cdf_lb) / self.mass
    }

    fn quantile(&self, p: f64) -> f64 {
        self.parent
            .inverse_cdf((self.cdf_lb + p * self.mass).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_symmetric_truncation() {
        let dist = TruncNormal::from_parameters(&[0.0, 1.0, -1.0, 1.0]).unwrap();
        assert_eq!(dist.bounds(), (-1.0, 1.0));
        assert_relative_eq!(dist.cdf(0.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(dist.icdf(0.5), 0.0, epsilon = 1e-12);
        assert_eq!(dist.pdf(1.5), 0.0);
        assert_eq!(dist.cdf(-2.0), 0.0);
        assert_eq!(dist.cdf(2.0), 1.0);
    }

    #[test]
    fn test_density_is_rescaled() {
        let dist = TruncNormal::from_parameters(&[0.0, 1.0, -1.0, 1.0]).unwrap();
        let parent = NormalDist::new(0.0, 1.0).unwrap();
        let mass = parent.cdf(1.0) - parent.cdf(-1.0);
        assert_relative_eq!(dist.pdf(0.3), parent.pdf(0.3) / mass, max_relative = 1e-12);
    }

    #[test]
    fn test_mean_outside_bounds() {
        let result = TruncNormal::from_parameters(&[5.0, 1.0, 0.0, 1.0]);
        match result {
            Err(InputError::InvalidParameters { message, .. }) => {
                assert!(message.contains("must be between the bounds"))
            }
            other => panic!("Expected InvalidParameters, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(TruncNormal::from_parameters(&[0.5, -0.1, 0.0, 1.0]).is_err());
        assert!(TruncNormal::from_parameters(&[0.5, 0.1, 1.0, 0.0]).is_err());
        assert!(TruncNormal::from_parameters(&[0.5, 0.1, 0.0]).is_err());
    }
}
