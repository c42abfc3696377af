//! Tests for univariate marginals.
//!
//! Every supported family is checked for:
//! - consistency of `cdf` and `icdf` away from the extreme tails
//! - a non-negative density that integrates to one over the bounds
//! - rejection of invalid parameters and unknown family names

#[cfg(test)]
mod test_marginal {
    use approx::assert_relative_eq;
    use ndarray::{array, Array1};
    use uqtestfuns::prelude::*;

    const QUADRATURE_INTERVALS: usize = 20_000;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn marginal(distribution: &str, parameters: &[f64]) -> Marginal {
        Marginal::builder()
            .distribution(distribution)
            .parameters(parameters.to_vec())
            .build()
            .expect("Failed to build marginal")
    }

    /// One valid parameter set per family.
    fn all_families() -> Vec<Marginal> {
        vec![
            marginal("uniform", &[-2.0, 5.0]),
            marginal("normal", &[0.1, 0.0161812]),
            marginal("lognormal", &[0.0, 0.25]),
            marginal("truncnormal", &[0.0, 1.0, -1.0, 2.0]),
            marginal("gumbel", &[1013.0, 558.0]),
            marginal("trunc-gumbel", &[1013.0, 558.0, 500.0, 3000.0]),
            marginal("beta", &[2.5, 3.5, -1.0, 2.0]),
            marginal("triangular", &[0.0, 2.0, 0.5]),
            marginal("exponential", &[2.0]),
            marginal("logitnormal", &[0.2, 0.7]),
        ]
    }

    /// Composite Simpson rule of the density over the bounds.
    fn integrate_pdf(marginal: &Marginal) -> f64 {
        let (lower, upper) = (marginal.lower(), marginal.upper());
        let h = (upper - lower) / QUADRATURE_INTERVALS as f64;
        let xx = Array1::from_iter((0..=QUADRATURE_INTERVALS).map(|i| lower + i as f64 * h));
        let yy = marginal.pdf(&xx);

        let weighted: f64 = yy
            .iter()
            .enumerate()
            .map(|(i, y)| {
                if i == 0 || i == QUADRATURE_INTERVALS {
                    *y
                } else if i % 2 == 1 {
                    4.0 * y
                } else {
                    2.0 * y
                }
            })
            .sum();

        weighted * h / 3.0
    }

    #[test]
    fn test_every_family_is_covered() {
        let covered: Vec<_> = all_families().iter().map(|m| m.distribution()).collect();
        assert_eq!(covered, supported_distributions());
    }

    #[test]
    fn test_cdf_icdf_round_trip() {
        init_logger();

        let pp = Array1::linspace(1e-3, 1.0 - 1e-3, 101);
        for marginal in all_families() {
            // ACT
            let xx = marginal.icdf(&pp);
            let pp_back = marginal.cdf(&xx);
            let xx_back = marginal.icdf(&pp_back);

            // ASSERT
            for i in 0..pp.len() {
                assert_relative_eq!(pp_back[i], pp[i], epsilon = 1e-12, max_relative = 1e-6);
                assert_relative_eq!(xx_back[i], xx[i], epsilon = 1e-9, max_relative = 1e-6);
                assert!(xx[i] >= marginal.lower() && xx[i] <= marginal.upper());
            }
        }
    }

    #[test]
    fn test_pdf_integrates_to_one() {
        for marginal in all_families() {
            let integral = integrate_pdf(&marginal);
            assert!(
                (integral - 1.0).abs() < 1e-3,
                "{} integrates to {}",
                marginal.distribution(),
                integral
            );
        }
    }

    #[test]
    fn test_pdf_is_non_negative() {
        for marginal in all_families() {
            let span = marginal.upper() - marginal.lower();
            let xx = Array1::linspace(marginal.lower() - span, marginal.upper() + span, 1001);
            assert!(marginal.pdf(&xx).iter().all(|&y| y >= 0.0));
        }
    }

    #[test]
    fn test_cdf_saturates_outside_bounds() {
        for marginal in all_families() {
            let span = marginal.upper() - marginal.lower();
            assert_eq!(marginal.cdf_at(marginal.lower() - span), 0.0);
            assert_eq!(marginal.cdf_at(marginal.upper() + span), 1.0);
            assert_eq!(marginal.icdf_at(0.0), marginal.lower());
            assert_eq!(marginal.icdf_at(1.0), marginal.upper());
        }
    }

    #[test]
    fn test_icdf_outside_unit_interval() {
        for marginal in all_families() {
            let result = marginal.icdf_at(1.5);
            if marginal.kind() == DistributionKind::Uniform {
                assert_relative_eq!(result, -2.0 + 7.0 * 1.5);
            } else {
                assert!(result.is_nan(), "{}", marginal.distribution());
            }
        }
    }

    #[test]
    fn test_identity_transform() {
        for marginal in all_families() {
            // ARRANGE
            let xx = marginal.icdf(&Array1::linspace(0.01, 0.99, 25));

            // ACT
            let transformed = marginal.transform_sample(&xx, &marginal);

            // ASSERT
            for (x, y) in xx.iter().zip(transformed.iter()) {
                assert_relative_eq!(*x, *y, epsilon = 1e-9, max_relative = 1e-6);
            }
        }
    }

    #[test]
    fn test_transform_between_families() {
        let source = marginal("uniform", &[0.0, 1.0]);
        let target = marginal("normal", &[0.0, 1.0]);

        let transformed = source.transform_sample(&array![0.5, 0.975], &target);
        assert_relative_eq!(transformed[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(transformed[1], 1.959_963_984_540_054, epsilon = 1e-9);
    }

    #[test]
    fn test_uniform_scenario() {
        let uniform = marginal("uniform", &[0.0, 1.0]);
        assert_eq!((uniform.lower(), uniform.upper()), (0.0, 1.0));
        assert_eq!(uniform.pdf_at(0.5), 1.0);
        assert_eq!(uniform.cdf_at(0.5), 0.5);
        assert_eq!(uniform.icdf_at(0.5), 0.5);
    }

    #[test]
    fn test_wrong_arity_fails() {
        for kind in DistributionKind::ALL {
            let result = Marginal::builder()
                .distribution(kind.name())
                .parameters(vec![0.1; kind.arity() + 1])
                .build();
            assert!(
                matches!(result, Err(InputError::InvalidParameters { .. })),
                "{kind} accepted {} parameters",
                kind.arity() + 1
            );
        }
    }

    #[test]
    fn test_constraint_violations_fail() {
        let invalid: Vec<(&str, Vec<f64>)> = vec![
            ("uniform", vec![1.0, 0.0]),
            ("normal", vec![0.0, 0.0]),
            ("lognormal", vec![0.0, -1.0]),
            ("truncnormal", vec![2.0, 1.0, -1.0, 1.0]),
            ("gumbel", vec![0.0, -1.0]),
            ("trunc-gumbel", vec![0.0, 1.0, 2.0, 1.0]),
            ("beta", vec![-1.0, 1.0, 0.0, 1.0]),
            ("triangular", vec![0.0, 1.0, 2.0]),
            ("exponential", vec![0.0]),
            ("logitnormal", vec![0.0, 0.0]),
        ];

        for (distribution, parameters) in invalid {
            let result = Marginal::builder()
                .distribution(distribution)
                .parameters(parameters)
                .build();
            match result {
                Err(InputError::InvalidParameters {
                    distribution: name, ..
                }) => assert_eq!(name, distribution),
                other => panic!("Expected InvalidParameters for {distribution}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_overflowing_bounds_fail() {
        let overflowing: Vec<(&str, Vec<f64>)> = vec![
            ("uniform", vec![-1e308, 1e308]),
            ("normal", vec![0.0, 1e308]),
            ("lognormal", vec![0.0, 1e3]),
            ("truncnormal", vec![0.0, 1.0, -1e308, 1e308]),
            ("gumbel", vec![0.0, 1e307]),
            ("trunc-gumbel", vec![0.0, 1.0, -1e308, 1e308]),
            ("beta", vec![2.0, 2.0, -1e308, 1e308]),
            ("triangular", vec![-1e308, 1e308, 0.0]),
            ("exponential", vec![1e-310]),
        ];

        for (distribution, parameters) in overflowing {
            let result = Marginal::builder()
                .distribution(distribution)
                .parameters(parameters)
                .build();
            assert!(
                matches!(result, Err(InputError::InvalidParameters { .. })),
                "{distribution} accepted overflowing bounds"
            );
        }

        // Always bounded by [0, 1].
        let logitnormal = marginal("logitnormal", &[1e308, 1e308]);
        assert_eq!((logitnormal.lower(), logitnormal.upper()), (0.0, 1.0));
    }

    #[test]
    fn test_truncnormal_mean_outside_bounds_fails() {
        let result = Marginal::builder()
            .distribution("truncnormal")
            .parameters(vec![5.0, 1.0, 0.0, 1.0])
            .build();
        assert!(matches!(result, Err(InputError::InvalidParameters { .. })));
    }

    #[test]
    fn test_unsupported_distribution_fails() {
        let result = Marginal::builder()
            .distribution("weibull")
            .parameters(vec![1.0, 1.0])
            .build();
        assert_eq!(
            result.unwrap_err(),
            InputError::UnsupportedDistribution("weibull".to_string())
        );
    }

    #[test]
    fn test_from_parsed_spec() {
        let spec: MarginalSpec = "Q ~ Gumbel(1013, 558)".parse().unwrap();
        let marginal = Marginal::from_spec(&spec, Some(42)).unwrap();

        assert_eq!(marginal.name(), Some("Q"));
        assert_eq!(marginal.distribution(), "gumbel");
        assert_eq!(marginal.rng_seed(), Some(42));
        assert_eq!(marginal.to_spec(), spec);
    }

    #[test]
    fn test_sample_lies_within_bounds() {
        for (seed, marginal) in all_families().into_iter().enumerate() {
            let mut marginal = marginal;
            marginal.reset_rng(Some(seed as u64));
            let sample = marginal.get_sample(1000);
            assert_eq!(sample.len(), 1000);
            assert!(sample
                .iter()
                .all(|&x| x >= marginal.lower() && x <= marginal.upper()));
        }
    }
}
