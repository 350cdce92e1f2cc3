use krs_rs::internals::primitives::errors::KrsError;
use krs_rs::internals::primitives::sample::{
    DesignQuery, DesignSample, Sample, ScalarSample, gather_rows,
};
use krs_rs::internals::primitives::validator::Validator;

// ============================================================================
// Scalar Sample Tests
// ============================================================================

#[test]
fn test_scalar_sample_rejects_mismatched_lengths() {
    let err = ScalarSample::new(&[1.0, 2.0], &[1.0]).unwrap_err();
    assert_eq!(err, KrsError::MismatchedInputs { x_len: 2, y_len: 1 });
}

#[test]
fn test_scalar_sample_subset_preserves_order() {
    let sample = ScalarSample::new(&[0.0, 1.0, 2.0, 3.0], &[10.0, 11.0, 12.0, 13.0]).unwrap();
    let sub = sample.subset(&[3, 0]);
    assert_eq!(sub.x, vec![3.0, 0.0]);
    assert_eq!(sub.y, vec![13.0, 10.0]);
    assert_eq!(sample.query_subset(&[2, 1]), vec![2.0, 1.0]);
    assert_eq!(sample.as_query(), sample.x);
    assert_eq!(sample.len(), 4);
    assert_eq!(sample.response(), &[10.0, 11.0, 12.0, 13.0]);
}

// ============================================================================
// Design Sample Tests
// ============================================================================

#[test]
fn test_design_with_intercept() {
    let sample = DesignSample::with_intercept(&[1.0, 2.0], &[0.5, 1.5, 2.5, 3.5], 2).unwrap();
    assert_eq!(sample.n_coeffs, 3);
    assert_eq!(sample.design_row(0), &[1.0, 0.5, 1.5]);
    assert_eq!(sample.design_row(1), &[1.0, 2.5, 3.5]);
    assert_eq!(sample.location(1), &[2.5, 3.5]);
}

#[test]
fn test_design_sample_shape_checks() {
    let err = DesignSample::new(&[1.0, 2.0], &[0.0, 1.0, 2.0], 2, &[1.0, 1.0], 1).unwrap_err();
    assert!(matches!(
        err,
        KrsError::DimensionMismatch {
            what: "locations",
            expected: 4,
            got: 3
        }
    ));

    let err = DesignSample::new(&[1.0, 2.0], &[0.0, 1.0], 1, &[1.0, 1.0, 0.0], 2).unwrap_err();
    assert!(matches!(err, KrsError::DimensionMismatch { what: "design", .. }));
}

#[test]
fn test_design_sample_subset_and_query() {
    let sample = DesignSample::with_intercept(&[1.0, 2.0, 3.0], &[0.0, 1.0, 2.0], 1).unwrap();
    let sub = sample.subset(&[2, 0]);
    assert_eq!(sub.y, vec![3.0, 1.0]);
    assert_eq!(sub.locations, vec![2.0, 0.0]);
    assert_eq!(sub.design, vec![1.0, 2.0, 1.0, 0.0]);

    let query = sample.query_subset(&[1]);
    assert_eq!(query.len(), 1);
    assert_eq!(query.design_row(0), &[1.0, 1.0]);
    assert_eq!(sample.as_query().len(), 3);
}

#[test]
fn test_design_query_constructors() {
    let query = DesignQuery::with_intercept(&[0.0, 1.0, 2.0, 3.0], 2).unwrap();
    assert_eq!(query.len(), 2);
    assert_eq!(query.location(1), &[2.0, 3.0]);
    assert_eq!(query.design_row(1), &[1.0, 2.0, 3.0]);

    assert!(DesignQuery::<f64>::with_intercept(&[0.0, 1.0, 2.0], 2).is_err());
    assert!(DesignQuery::<f64>::new(&[0.0], 0, &[1.0], 1).is_err());
    assert!(DesignQuery::new(&[0.0, 1.0], 1, &[1.0], 1).is_err());
}

#[test]
fn test_gather_rows() {
    let data = [1, 2, 3, 4, 5, 6];
    assert_eq!(gather_rows(&data, 2, &[2, 0]), vec![5, 6, 1, 2]);
}

// ============================================================================
// Validator Tests
// ============================================================================

#[test]
fn test_validate_inputs() {
    assert_eq!(
        Validator::validate_inputs::<f64>(&[], &[]),
        Err(KrsError::EmptyInput)
    );
    assert!(matches!(
        Validator::validate_inputs(&[1.0, f64::NAN], &[1.0, 2.0]),
        Err(KrsError::InvalidNumericValue(_))
    ));
    assert!(Validator::validate_inputs(&[1.0, 2.0], &[1.0, 2.0]).is_ok());
}

#[test]
fn test_validate_bandwidth() {
    assert!(Validator::validate_bandwidth(0.1).is_ok());
    assert_eq!(
        Validator::validate_bandwidth(0.0),
        Err(KrsError::InvalidBandwidth(0.0))
    );
    assert!(Validator::validate_bandwidth(-1.0).is_err());
    assert!(Validator::validate_bandwidth(f64::INFINITY).is_err());
    assert!(Validator::validate_bandwidth(f64::NAN).is_err());
}

#[test]
fn test_validate_bandwidth_matrix() {
    assert!(Validator::validate_bandwidth_matrix(&[1.0, 0.2, 0.2, 1.0], 2).is_ok());
    assert_eq!(
        Validator::validate_bandwidth_matrix(&[1.0, 0.2, 0.3, 1.0], 2),
        Err(KrsError::AsymmetricBandwidth { row: 0, col: 1 })
    );
    assert!(matches!(
        Validator::validate_bandwidth_matrix(&[1.0, 0.0, 1.0], 2),
        Err(KrsError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_validate_folds_and_permutation() {
    assert!(Validator::validate_kfold(2, 2).is_ok());
    assert_eq!(
        Validator::validate_kfold(1, 10),
        Err(KrsError::InvalidFolds { k: 1, n: 10 })
    );
    assert_eq!(
        Validator::validate_kfold(11, 10),
        Err(KrsError::InvalidFolds { k: 11, n: 10 })
    );

    assert!(Validator::validate_permutation(&[2, 0, 1], 3).is_ok());
    assert!(Validator::validate_permutation(&[0, 0, 1], 3).is_err());
    assert!(Validator::validate_permutation(&[0, 1, 3], 3).is_err());
    assert!(Validator::validate_permutation(&[0, 1], 3).is_err());

    assert_eq!(
        Validator::validate_grid::<f64>(&[]),
        Err(KrsError::EmptyGrid)
    );
}
