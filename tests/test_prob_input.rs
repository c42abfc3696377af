//! Tests for multivariate probabilistic inputs.
//!
//! Covers construction from specification files, seeded sampling, the joint
//! density and the transform from the canonical uniform domain.

#[cfg(test)]
mod test_prob_input {
    use approx::assert_relative_eq;
    use ndarray::{array, Array2, Axis};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use uqtestfuns::prelude::*;

    fn get_borehole_spec() -> ProbInputSpec {
        let path = PathBuf::from("tests/data/borehole.json");
        load_spec(&path).expect("Failed to load specification")
    }

    fn unit_square(rng_seed: Option<u64>) -> ProbInput {
        let spec = ProbInputSpecBuilder::default()
            .to_marginals(
                MarginalSpecBuilder::default()
                    .distribution("uniform")
                    .parameters(vec![0.0, 1.0])
                    .build()
                    .unwrap(),
            )
            .to_marginals(
                MarginalSpecBuilder::default()
                    .distribution("uniform")
                    .parameters(vec![0.0, 1.0])
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        ProbInput::from_spec(&spec, rng_seed).unwrap()
    }

    fn correlation(xx: &Array2<f64>) -> f64 {
        let means = xx.mean_axis(Axis(0)).unwrap();
        let centered = xx - &means;
        let covariance = (&centered.column(0) * &centered.column(1)).sum();
        let var_0 = centered.column(0).mapv(|x| x * x).sum();
        let var_1 = centered.column(1).mapv(|x| x * x).sum();
        covariance / (var_0 * var_1).sqrt()
    }

    #[test]
    fn test_load_spec() {
        // ACT
        let spec = get_borehole_spec();
        let input = ProbInput::from_spec(&spec, None).unwrap();

        // ASSERT
        assert_eq!(input.name(), Some("Harper1983"));
        assert_eq!(input.spatial_dimension(), 8);
        assert_eq!(input.copula(), Copula::Independent);
        assert_eq!(input.marginals()[0].name(), Some("rw"));
        assert_eq!(input.marginals()[1].distribution(), "lognormal");
    }

    #[test]
    fn test_save_and_reload_spec() {
        // ARRANGE
        let spec = get_borehole_spec();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("borehole.json");

        // ACT
        save_spec(&path, &spec).unwrap();
        let reloaded = load_spec(&path).unwrap();

        // ASSERT
        assert_eq!(reloaded, spec);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_spec("tests/data/does_not_exist.json");
        assert!(matches!(result, Err(IOError::FileNotFound(_))));
    }

    #[test]
    fn test_save_into_missing_directory() {
        let spec = get_borehole_spec();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("borehole.json");

        let result = save_spec(&path, &spec);
        assert!(matches!(result, Err(IOError::FileWriteError(_))));
    }

    #[test]
    fn test_spec_round_trip() {
        let spec = get_borehole_spec();
        let input = ProbInput::from_spec(&spec, Some(42)).unwrap();
        assert_eq!(input.to_spec(), spec);

        let json = serde_json::to_string(&input).unwrap();
        let restored: ProbInput = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.to_spec(), spec);
        assert_eq!(restored, input);
    }

    #[test]
    fn test_invalid_spec_is_rejected() {
        let mut spec = get_borehole_spec();
        spec.marginals[0].parameters = vec![0.1, -1.0];

        let result = ProbInput::from_spec(&spec, None);
        assert!(matches!(result, Err(InputError::InvalidParameters { .. })));
    }

    #[test]
    fn test_sample_scenario() {
        let input = unit_square(Some(1));
        let xx = input.get_sample(5);
        assert_eq!(xx.shape(), &[5, 2]);
        assert!(xx.iter().all(|&x| (0.0..=1.0).contains(&x)));
    }

    #[test]
    fn test_seeded_sample_is_reproducible() {
        let first = get_borehole_spec();
        let xx = ProbInput::from_spec(&first, Some(42)).unwrap().get_sample(100);
        let yy = ProbInput::from_spec(&first, Some(42)).unwrap().get_sample(100);
        assert_eq!(xx, yy);
    }

    #[test]
    fn test_columns_are_independent() {
        let input = unit_square(Some(2024));
        let xx = input.get_sample(10_000);
        assert!(correlation(&xx).abs() < 0.05);
    }

    #[test]
    fn test_equality() {
        let spec = get_borehole_spec();
        let first = ProbInput::from_spec(&spec, Some(1)).unwrap();
        let second = ProbInput::from_spec(&spec, Some(2)).unwrap();
        let unseeded = ProbInput::from_spec(&spec, None).unwrap();
        first.get_sample(10);
        assert_eq!(first, second);
        assert_eq!(first, unseeded);
        assert_eq!(first.marginals()[0], second.marginals()[0]);

        let other = unit_square(Some(1));
        assert_ne!(first, other);
    }

    #[test]
    fn test_joint_pdf() {
        let input = unit_square(None);
        let pdf = input.pdf(&array![[0.2, 0.3], [0.5, 1.5]]).unwrap();
        assert_relative_eq!(pdf[0], 1.0);
        assert_eq!(pdf[1], 0.0);
    }

    #[test]
    fn test_transform_sample_dimension_mismatch() {
        let input = unit_square(None);
        let xx = array![[0.0, 0.1, 0.2], [0.3, 0.4, 0.5]];
        let result = input.transform_sample(&xx, &UniformDomain::default());
        assert_eq!(
            result,
            Err(InputError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_transform_sample_to_borehole_domain() {
        // ARRANGE
        let input = ProbInput::from_spec(&get_borehole_spec(), None).unwrap();
        let xx = array![
            [0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            [-1.0, 1.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5]
        ];

        // ACT
        let transformed = input
            .transform_sample(&xx, &UniformDomain::default())
            .unwrap();

        // ASSERT
        assert_relative_eq!(transformed[[0, 0]], 0.1, epsilon = 1e-12);
        assert_relative_eq!(transformed[[0, 1]], 7.71_f64.exp(), max_relative = 1e-9);
        assert_relative_eq!(transformed[[0, 2]], 63070.0);
        assert_relative_eq!(transformed[[0, 3]], 1100.0);
        assert_relative_eq!(transformed[[1, 0]], input.marginals()[0].lower());
        assert_relative_eq!(transformed[[1, 1]], input.marginals()[1].upper());
        assert_relative_eq!(transformed[[1, 4]], 63.1 + 0.75 * (116.0 - 63.1), epsilon = 1e-9);
    }

    #[test]
    fn test_transform_sample_in_unit_domain() {
        let input = ProbInput::from_spec(&get_borehole_spec(), None).unwrap();
        let xx = Array2::from_elem((4, 8), 0.5);

        let transformed = input
            .transform_sample(&xx, &UniformDomain::unit())
            .unwrap();
        for (column, marginal) in transformed.axis_iter(Axis(1)).zip(input.marginals()) {
            assert!(column.iter().all(|&x| (x - marginal.icdf_at(0.5)).abs() < 1e-9));
        }

        let result = input.transform_sample(&xx.mapv(|x| x + 1.0), &UniformDomain::unit());
        assert_eq!(result, Err(InputError::DomainError { min: 0.0, max: 1.0 }));
    }

    #[test]
    fn test_transform_between_inputs() {
        let source = unit_square(None);
        let target = ProbInput::builder()
            .marginals(vec![
                Marginal::builder()
                    .distribution("exponential")
                    .parameters(vec![1.0])
                    .build()
                    .unwrap(),
                Marginal::builder()
                    .distribution("uniform")
                    .parameters(vec![10.0, 20.0])
                    .build()
                    .unwrap(),
            ])
            .build();

        let transformed = target
            .transform_sample_from(&array![[0.5, 0.25]], &source)
            .unwrap();
        assert_relative_eq!(transformed[[0, 0]], 2.0_f64.ln(), max_relative = 1e-12);
        assert_relative_eq!(transformed[[0, 1]], 12.5);
    }

    #[test]
    fn test_reset_rng() {
        let mut input = unit_square(Some(5));
        let head = input.get_sample(10);

        input.reset_rng(Some(5));
        assert_eq!(input.rng_seed(), Some(5));
        assert_eq!(input.get_sample(10), head);
    }

    #[test]
    fn test_validate_spec_file() {
        let content = std::fs::read_to_string("tests/data/borehole.json").unwrap();
        let report = uqtestfuns::validation::validate_spec_json(&content).unwrap();
        assert!(report.valid);
    }
}
