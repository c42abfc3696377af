//! Univariate marginal distributions.
//!
//! A [`Marginal`] is an immutable value object: a validated distribution
//! family bound to one parameter set, together with a name, an optional
//! description and the finite numerical bounds of its support. Every way of
//! constructing a marginal goes through [`Marginal::builder`], which is the
//! single validation gate.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use uqtestfuns::prob_input::marginal::Marginal;
//!
//! let marginal = Marginal::builder()
//!     .distribution("Normal")
//!     .parameters(vec![0.0, 1.0])
//!     .name("x")
//!     .rng_seed(42)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(marginal.distribution(), "normal");
//! let probabilities = marginal.cdf(&array![-1.0, 0.0, 1.0]);
//! assert!((probabilities[1] - 0.5).abs() < 1e-12);
//! ```

use std::{
    cell::RefCell,
    fmt,
    hash::{Hash, Hasher},
};

use log::{debug, trace};
use ndarray::{Array, Array1, ArrayBase, Data, Dimension};
use ordered_float::OrderedFloat;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{
    error::InputError,
    registry::{validate_distribution, Distribution, DistributionKind},
    spec::MarginalSpec,
};

/// A univariate marginal distribution.
///
/// The pseudo-random number generator is created lazily on the first call to
/// [`Marginal::get_sample`] from `rng_seed` (or from system entropy when no
/// seed is set). Neither the generator nor the seed is part of the value:
/// equality, hashing, `Debug` and serialization ignore both, and a clone
/// starts a fresh stream from the same seed.
#[derive(Serialize, Deserialize)]
#[serde(try_from = "MarginalSpec", into = "MarginalSpec")]
pub struct Marginal {
    distribution: DistributionKind,
    parameters: Vec<f64>,
    name: Option<String>,
    description: Option<String>,
    lower: f64,
    upper: f64,
    rng_seed: Option<u64>,
    family: Distribution,
    rng: RefCell<Option<StdRng>>,
}

#[bon::bon]
impl Marginal {
    /// Creates a marginal after resolving the family name and validating the
    /// parameters against it.
    ///
    /// # Arguments
    ///
    /// * `distribution` - Family name, case-insensitive, aliases allowed
    /// * `parameters` - Parameters in the order of the family
    /// * `name` - Optional name of the random variable
    /// * `description` - Optional free-text description
    /// * `rng_seed` - Optional seed of the sampling stream
    ///
    /// # Errors
    ///
    /// * [`InputError::UnsupportedDistribution`] for unknown family names
    /// * [`InputError::InvalidParameters`] when the parameters violate a
    ///   constraint of the family
    #[builder]
    pub fn new(
        #[builder(into)] distribution: String,
        parameters: Vec<f64>,
        #[builder(into)] name: Option<String>,
        #[builder(into)] description: Option<String>,
        rng_seed: Option<u64>,
    ) -> Result<Self, InputError> {
        let kind = validate_distribution(&distribution)?;
        let family = kind.build(&parameters)?;
        let (lower, upper) = family.bounds();

        debug!(
            "Created {} marginal '{}' with parameters {:?} on [{}, {}]",
            kind,
            name.as_deref().unwrap_or("-"),
            parameters,
            lower,
            upper
        );

        Ok(Self {
            distribution: kind,
            parameters,
            name,
            description,
            lower,
            upper,
            rng_seed,
            family,
            rng: RefCell::new(None),
        })
    }
}

impl Marginal {
    /// Creates a marginal from its specification record.
    pub fn from_spec(spec: &MarginalSpec, rng_seed: Option<u64>) -> Result<Self, InputError> {
        Marginal::builder()
            .distribution(spec.distribution.clone())
            .parameters(spec.parameters.clone())
            .maybe_name(spec.name.clone())
            .maybe_description(spec.description.clone())
            .maybe_rng_seed(rng_seed)
            .build()
    }

    pub fn to_spec(&self) -> MarginalSpec {
        MarginalSpec {
            distribution: self.distribution().to_string(),
            parameters: self.parameters.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Canonical name of the distribution family.
    pub fn distribution(&self) -> &'static str {
        self.distribution.name()
    }

    pub fn kind(&self) -> DistributionKind {
        self.distribution
    }

    pub fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Finite lower bound of the support.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Finite upper bound of the support.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Probability density, elementwise. Zero outside `[lower, upper]`.
    pub fn pdf<S, D>(&self, xx: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        xx.mapv(|x| self.family.pdf(x))
    }

    /// Cumulative distribution function, elementwise.
    pub fn cdf<S, D>(&self, xx: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        xx.mapv(|x| self.family.cdf(x))
    }

    /// Inverse cumulative distribution function, elementwise.
    ///
    /// `0` and `1` map onto the bounds. Values outside `[0, 1]` are not
    /// rejected: the uniform family extrapolates linearly and every other
    /// family yields `NaN`.
    pub fn icdf<S, D>(&self, xx: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        xx.mapv(|p| self.family.icdf(p))
    }

    pub fn pdf_at(&self, x: f64) -> f64 {
        self.family.pdf(x)
    }

    pub fn cdf_at(&self, x: f64) -> f64 {
        self.family.cdf(x)
    }

    pub fn icdf_at(&self, p: f64) -> f64 {
        self.family.icdf(p)
    }

    /// Maps values of this marginal onto `other` through `other.icdf(self.cdf(xx))`.
    pub fn transform_sample<S, D>(&self, xx: &ArrayBase<S, D>, other: &Marginal) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        xx.mapv(|x| other.family.icdf(self.family.cdf(x)))
    }

    /// Draws `sample_size` values by inverse transform sampling.
    ///
    /// Repeated calls advance the same stream.
    pub fn get_sample(&self, sample_size: usize) -> Array1<f64> {
        let mut cell = self.rng.borrow_mut();
        let rng = cell.get_or_insert_with(|| {
            trace!(
                "Initializing generator of marginal '{}' with seed {:?}",
                self.name.as_deref().unwrap_or("-"),
                self.rng_seed
            );
            match self.rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            }
        });

        let uniforms: Array1<f64> = (0..sample_size).map(|_| rng.gen::<f64>()).collect();
        uniforms.mapv(|p| self.family.icdf(p))
    }

    /// Replaces the seed and drops the current generator.
    ///
    /// The next call to [`Marginal::get_sample`] starts a new stream from
    /// `rng_seed`, or from system entropy when `None`.
    pub fn reset_rng(&mut self, rng_seed: Option<u64>) {
        debug!(
            "Resetting generator of marginal '{}' with seed {:?}",
            self.name.as_deref().unwrap_or("-"),
            rng_seed
        );
        self.rng_seed = rng_seed;
        self.rng = RefCell::new(None);
    }
}

impl Clone for Marginal {
    fn clone(&self) -> Self {
        Self {
            distribution: self.distribution,
            parameters: self.parameters.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            lower: self.lower,
            upper: self.upper,
            rng_seed: self.rng_seed,
            family: self.family.clone(),
            rng: RefCell::new(None),
        }
    }
}

impl PartialEq for Marginal {
    fn eq(&self, other: &Self) -> bool {
        self.distribution == other.distribution
            && self.parameters == other.parameters
            && self.name == other.name
            && self.description == other.description
    }
}

// Parameters are validated finite, so equality is reflexive.
impl Eq for Marginal {}

impl Hash for Marginal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.distribution.hash(state);
        for parameter in &self.parameters {
            OrderedFloat(*parameter).hash(state);
        }
        self.name.hash(state);
        self.description.hash(state);
    }
}

impl fmt::Debug for Marginal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Marginal")
            .field("distribution", &self.distribution())
            .field("parameters", &self.parameters)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

impl TryFrom<MarginalSpec> for Marginal {
    type Error = InputError;

    fn try_from(spec: MarginalSpec) -> Result<Self, Self::Error> {
        Marginal::from_spec(&spec, None)
    }
}

impl From<Marginal> for MarginalSpec {
    fn from(marginal: Marginal) -> Self {
        marginal.to_spec()
    }
}
