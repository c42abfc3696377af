//! Multivariate probabilistic inputs.
//!
//! A [`ProbInput`] joins an ordered list of [`Marginal`]s through a
//! [`Copula`]. Every sample exchanged with it is an `N × M` array whose
//! columns follow the order of the marginals.

use std::hash::{Hash, Hasher};

use log::{debug, trace};
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{
    copula::Copula,
    error::InputError,
    marginal::Marginal,
    spec::{ProbInputSpec, ProbInputSpecVarDim},
    transform::{
        create_canonical_uniform_input, verify_sample_domain, verify_sample_shape, UniformDomain,
    },
};

/// A multivariate probabilistic input model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProbInputSpec", into = "ProbInputSpec")]
pub struct ProbInput {
    marginals: Vec<Marginal>,
    copula: Copula,
    name: Option<String>,
    description: Option<String>,
    rng_seed: Option<u64>,
}

#[bon::bon]
impl ProbInput {
    /// Creates a probabilistic input from validated marginals.
    ///
    /// When `rng_seed` is given, every marginal is reseeded with a seed drawn
    /// from a generator seeded with `rng_seed`, one per marginal in order.
    /// Without it the marginals keep their own seeds.
    #[builder]
    pub fn new(
        marginals: Vec<Marginal>,
        #[builder(default)] copula: Copula,
        #[builder(into)] name: Option<String>,
        #[builder(into)] description: Option<String>,
        rng_seed: Option<u64>,
    ) -> Self {
        let mut input = Self {
            marginals,
            copula,
            name,
            description,
            rng_seed,
        };

        if rng_seed.is_some() {
            input.reseed_marginals(rng_seed);
        }

        debug!(
            "Created probabilistic input '{}' with {} marginals ({} copula)",
            input.name.as_deref().unwrap_or("-"),
            input.marginals.len(),
            input.copula
        );

        input
    }
}

impl ProbInput {
    /// Creates a probabilistic input from a fixed-dimension specification.
    pub fn from_spec(spec: &ProbInputSpec, rng_seed: Option<u64>) -> Result<Self, InputError> {
        let marginals = spec
            .marginals
            .iter()
            .map(|m| Marginal::from_spec(m, None))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProbInput::builder()
            .marginals(marginals)
            .copula(spec.copula)
            .maybe_name(spec.name.clone())
            .maybe_description(spec.description.clone())
            .maybe_rng_seed(rng_seed)
            .build())
    }

    /// Creates a probabilistic input of the requested dimension from a
    /// variable-dimension specification.
    ///
    /// # Errors
    /// Returns [`InputError::MissingDimension`] when `dimension` is `None`.
    pub fn from_spec_vardim(
        spec: &ProbInputSpecVarDim,
        dimension: Option<usize>,
        rng_seed: Option<u64>,
    ) -> Result<Self, InputError> {
        let dimension = dimension.ok_or(InputError::MissingDimension)?;
        Self::from_spec(&spec.fix_dimension(dimension)?, rng_seed)
    }

    pub fn to_spec(&self) -> ProbInputSpec {
        ProbInputSpec {
            name: self.name.clone(),
            description: self.description.clone(),
            marginals: self.marginals.iter().map(Marginal::to_spec).collect(),
            copula: self.copula,
        }
    }

    /// Number of marginals (columns of every sample).
    pub fn spatial_dimension(&self) -> usize {
        self.marginals.len()
    }

    pub fn marginals(&self) -> &[Marginal] {
        &self.marginals
    }

    pub fn copula(&self) -> Copula {
        self.copula
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Draws an `(n, M)` sample.
    pub fn get_sample(&self, sample_size: usize) -> Array2<f64> {
        trace!(
            "Drawing {} points from probabilistic input '{}'",
            sample_size,
            self.name.as_deref().unwrap_or("-")
        );

        let mut xx = Array2::zeros((sample_size, self.spatial_dimension()));
        match self.copula {
            Copula::Independent => {
                for (mut column, marginal) in xx.axis_iter_mut(Axis(1)).zip(&self.marginals) {
                    column.assign(&marginal.get_sample(sample_size));
                }
            }
        }

        xx
    }

    /// Joint density of every row of `xx`.
    ///
    /// The product of the marginal densities is accumulated in log-space.
    pub fn pdf<S>(&self, xx: &ArrayBase<S, Ix2>) -> Result<Array1<f64>, InputError>
    where
        S: Data<Elem = f64>,
    {
        verify_sample_shape(xx, self.spatial_dimension())?;

        let yy = match self.copula {
            Copula::Independent => {
                let mut log_density = Array1::<f64>::zeros(xx.nrows());
                for (column, marginal) in xx.axis_iter(Axis(1)).zip(&self.marginals) {
                    log_density += &marginal.pdf(&column).mapv(f64::ln);
                }
                log_density.mapv(f64::exp)
            }
        };

        Ok(yy)
    }

    /// Transforms a sample from the canonical uniform `domain` onto this input.
    ///
    /// # Errors
    ///
    /// * [`InputError::InvalidDomain`] when `domain.min >= domain.max`
    /// * [`InputError::DimensionMismatch`] when `xx` does not have
    ///   [`ProbInput::spatial_dimension`] columns
    /// * [`InputError::DomainError`] when a value of `xx` lies outside the domain
    pub fn transform_sample<S>(
        &self,
        xx: &ArrayBase<S, Ix2>,
        domain: &UniformDomain,
    ) -> Result<Array2<f64>, InputError>
    where
        S: Data<Elem = f64>,
    {
        domain.validate()?;
        verify_sample_shape(xx, self.spatial_dimension())?;
        verify_sample_domain(xx, domain)?;

        let canonical = create_canonical_uniform_input(self.spatial_dimension(), domain)?;
        self.transform_sample_from(xx, &canonical)
    }

    /// Transforms a sample of `source` onto this input, column by column.
    ///
    /// Values are not range-checked: a value outside the support of the source
    /// marginal saturates at the bounds of the target marginal.
    pub fn transform_sample_from<S>(
        &self,
        xx: &ArrayBase<S, Ix2>,
        source: &ProbInput,
    ) -> Result<Array2<f64>, InputError>
    where
        S: Data<Elem = f64>,
    {
        if source.spatial_dimension() != self.spatial_dimension() {
            return Err(InputError::DimensionMismatch {
                expected: self.spatial_dimension(),
                found: source.spatial_dimension(),
            });
        }
        verify_sample_shape(xx, self.spatial_dimension())?;

        let mut transformed = Array2::zeros(xx.raw_dim());
        match (source.copula, self.copula) {
            (Copula::Independent, Copula::Independent) => {
                for ((mut target, column), (from, to)) in transformed
                    .axis_iter_mut(Axis(1))
                    .zip(xx.axis_iter(Axis(1)))
                    .zip(source.marginals.iter().zip(&self.marginals))
                {
                    target.assign(&from.transform_sample(&column, to));
                }
            }
        }

        Ok(transformed)
    }

    /// Replaces the seed of the input and reseeds every marginal from it.
    ///
    /// With `None` every marginal falls back to system entropy.
    pub fn reset_rng(&mut self, rng_seed: Option<u64>) {
        debug!(
            "Resetting generators of probabilistic input '{}' with seed {:?}",
            self.name.as_deref().unwrap_or("-"),
            rng_seed
        );
        self.rng_seed = rng_seed;
        self.reseed_marginals(rng_seed);
    }

    fn reseed_marginals(&mut self, rng_seed: Option<u64>) {
        match rng_seed {
            Some(seed) => {
                let mut seeder = StdRng::seed_from_u64(seed);
                for marginal in &mut self.marginals {
                    marginal.reset_rng(Some(seeder.gen::<u64>()));
                }
            }
            None => {
                for marginal in &mut self.marginals {
                    marginal.reset_rng(None);
                }
            }
        }
    }
}

impl PartialEq for ProbInput {
    fn eq(&self, other: &Self) -> bool {
        self.marginals == other.marginals
            && self.copula == other.copula
            && self.name == other.name
            && self.description == other.description
    }
}

impl Eq for ProbInput {}

impl Hash for ProbInput {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.marginals.hash(state);
        self.copula.hash(state);
        self.name.hash(state);
        self.description.hash(state);
    }
}

impl TryFrom<ProbInputSpec> for ProbInput {
    type Error = InputError;

    fn try_from(spec: ProbInputSpec) -> Result<Self, Self::Error> {
        ProbInput::from_spec(&spec, None)
    }
}

impl From<ProbInput> for ProbInputSpec {
    fn from(input: ProbInput) -> Self {
        input.to_spec()
    }
}
