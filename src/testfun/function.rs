//! The contract between UQ test functions and their probabilistic inputs.
//!
//! A test function is a deterministic map from an `N × M` sample to `N`
//! outputs. [`UqTestFun`] adds the checks every test function shares on top
//! of a raw [`UqTestFun::evaluate`]: the sample must have one column per
//! input dimension, and every value must lie inside the bounds of the
//! corresponding marginal.

use log::trace;
use ndarray::{Array1, Array2, ArrayBase, ArrayView2, Axis, Data, Ix2};

use crate::prob_input::{
    error::InputError,
    multivariate::ProbInput,
    transform::{verify_sample_shape, UniformDomain},
};

/// A UQ test function evaluated on samples of its probabilistic input.
pub trait UqTestFun {
    /// The probabilistic input model, if one is attached.
    fn prob_input(&self) -> Option<&ProbInput>;

    /// Number of input variables.
    fn spatial_dimension(&self) -> usize;

    /// Raw evaluation of the function on a sample, without any checks.
    fn evaluate(&self, xx: ArrayView2<'_, f64>) -> Array1<f64>;

    /// Returns the attached input or [`InputError::TypeMismatch`].
    fn require_prob_input(&self) -> Result<&ProbInput, InputError> {
        self.prob_input().ok_or_else(|| InputError::TypeMismatch {
            expected: "a probabilistic input model".to_string(),
            found: "no probabilistic input".to_string(),
        })
    }

    /// Evaluates the function after checking the sample against the input.
    ///
    /// # Errors
    ///
    /// * [`InputError::TypeMismatch`] when no probabilistic input is attached
    /// * [`InputError::DimensionMismatch`] when `xx` has the wrong number of columns
    /// * [`InputError::DomainError`] when a value lies outside the bounds of
    ///   its marginal
    fn call<S>(&self, xx: &ArrayBase<S, Ix2>) -> Result<Array1<f64>, InputError>
    where
        S: Data<Elem = f64>,
    {
        let prob_input = self.require_prob_input()?;
        verify_sample_shape(xx, self.spatial_dimension())?;

        for (column, marginal) in xx.axis_iter(Axis(1)).zip(prob_input.marginals()) {
            let (lower, upper) = (marginal.lower(), marginal.upper());
            if column.iter().any(|x| !(lower..=upper).contains(x)) {
                return Err(InputError::DomainError {
                    min: lower,
                    max: upper,
                });
            }
        }

        trace!("Evaluating test function on {} points", xx.nrows());
        Ok(self.evaluate(xx.view()))
    }

    /// Transforms a sample from the canonical uniform `domain` onto the
    /// domain of the function.
    fn transform_sample<S>(
        &self,
        xx: &ArrayBase<S, Ix2>,
        domain: &UniformDomain,
    ) -> Result<Array2<f64>, InputError>
    where
        S: Data<Elem = f64>,
    {
        self.require_prob_input()?.transform_sample(xx, domain)
    }

    /// Draws a sample from the probabilistic input.
    fn get_sample(&self, sample_size: usize) -> Result<Array2<f64>, InputError> {
        Ok(self.require_prob_input()?.get_sample(sample_size))
    }
}

/// A test function backed by an evaluation closure.
///
/// The closure receives the sample and the parameter vector of the function
/// (empty when the function is not parameterized).
#[derive(Clone)]
pub struct TestFunction<F>
where
    F: Fn(ArrayView2<'_, f64>, &[f64]) -> Array1<f64>,
{
    evaluate_fn: F,
    spatial_dimension: usize,
    prob_input: Option<ProbInput>,
    parameters: Option<Vec<f64>>,
    name: Option<String>,
}

#[bon::bon]
impl<F> TestFunction<F>
where
    F: Fn(ArrayView2<'_, f64>, &[f64]) -> Array1<f64>,
{
    /// Creates a test function.
    ///
    /// `spatial_dimension` defaults to the dimension of `prob_input`. At
    /// least one of the two must be given, and they must agree when both are.
    #[builder]
    pub fn new(
        evaluate: F,
        spatial_dimension: Option<usize>,
        prob_input: Option<ProbInput>,
        parameters: Option<Vec<f64>>,
        #[builder(into)] name: Option<String>,
    ) -> Result<Self, InputError> {
        let spatial_dimension = match (spatial_dimension, &prob_input) {
            (Some(dimension), Some(input)) if dimension != input.spatial_dimension() => {
                return Err(InputError::DimensionMismatch {
                    expected: dimension,
                    found: input.spatial_dimension(),
                });
            }
            (Some(dimension), _) => dimension,
            (None, Some(input)) => input.spatial_dimension(),
            (None, None) => return Err(InputError::MissingDimension),
        };

        Ok(Self {
            evaluate_fn: evaluate,
            spatial_dimension,
            prob_input,
            parameters,
            name,
        })
    }
}

impl<F> TestFunction<F>
where
    F: Fn(ArrayView2<'_, f64>, &[f64]) -> Array1<f64>,
{
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn parameters(&self) -> Option<&[f64]> {
        self.parameters.as_deref()
    }

    pub fn set_parameters(&mut self, parameters: Option<Vec<f64>>) {
        self.parameters = parameters;
    }

    /// Attaches a probabilistic input of matching dimension.
    pub fn set_prob_input(&mut self, prob_input: ProbInput) -> Result<(), InputError> {
        if prob_input.spatial_dimension() != self.spatial_dimension {
            return Err(InputError::DimensionMismatch {
                expected: self.spatial_dimension,
                found: prob_input.spatial_dimension(),
            });
        }
        self.prob_input = Some(prob_input);
        Ok(())
    }

    /// Reseeds the attached probabilistic input.
    pub fn reset_rng(&mut self, rng_seed: Option<u64>) -> Result<(), InputError> {
        match self.prob_input.as_mut() {
            Some(input) => {
                input.reset_rng(rng_seed);
                Ok(())
            }
            None => Err(InputError::TypeMismatch {
                expected: "a probabilistic input model".to_string(),
                found: "no probabilistic input".to_string(),
            }),
        }
    }
}

impl<F> UqTestFun for TestFunction<F>
where
    F: Fn(ArrayView2<'_, f64>, &[f64]) -> Array1<f64>,
{
    fn prob_input(&self) -> Option<&ProbInput> {
        self.prob_input.as_ref()
    }

    fn spatial_dimension(&self) -> usize {
        self.spatial_dimension
    }

    fn evaluate(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        (self.evaluate_fn)(xx, self.parameters.as_deref().unwrap_or(&[]))
    }
}
