//! UQ Test Functions Library
//!
//! This library provides the probabilistic input models used to benchmark
//! uncertainty-quantification and sensitivity-analysis methods:
//! - Univariate marginals over a registry of distribution families
//! - Multivariate inputs joining marginals through a copula
//! - Isoprobabilistic transforms from a canonical uniform domain
//! - The contract consumed by UQ test functions
//! - Loading, saving and validating input specifications

#![warn(unused_imports)]

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::io::*;
    pub use crate::prob_input::copula::*;
    pub use crate::prob_input::error::*;
    pub use crate::prob_input::marginal::*;
    pub use crate::prob_input::multivariate::*;
    pub use crate::prob_input::registry::{
        supported_distributions, validate_distribution, Distribution, DistributionKind, Family,
    };
    pub use crate::prob_input::spec::*;
    pub use crate::prob_input::transform::*;
    pub use crate::testfun::function::*;
}

/// Probabilistic input models
pub mod prob_input {
    /// Dependence structures between marginals
    pub mod copula;
    /// Error types for input models
    pub mod error;
    /// Univariate marginal distributions
    pub mod marginal;
    /// Multivariate probabilistic inputs
    pub mod multivariate;
    /// Registry of distribution families
    pub mod registry;
    /// Specification records
    pub mod spec;
    /// Canonical uniform domain and sample checks
    pub mod transform;

    /// Supported distribution families
    pub mod distributions {
        pub mod beta;
        pub mod exponential;
        pub mod gumbel;
        pub mod logitnormal;
        pub mod lognormal;
        pub mod normal;
        pub mod triangular;
        pub mod trunc_gumbel;
        pub mod truncnormal;
        pub mod uniform;
    }
}

/// Contract between test functions and their probabilistic inputs
pub mod testfun {
    pub use crate::testfun::function::*;

    pub mod function;
}

/// Validation of input specifications
pub mod validation {
    pub use crate::validation::schema::*;
    /// Main schema validation interface
    pub mod schema;
}

/// IO functionality
pub mod io;

/// Display of models as tables
pub mod info;
