use approx::assert_relative_eq;
use krs_rs::internals::algorithms::mean::KernelMeanSmoother;
use krs_rs::internals::algorithms::smoother::Smoother;
use krs_rs::internals::math::kernel::gaussian_density;
use krs_rs::internals::primitives::errors::{ErrorKind, KrsError};
use krs_rs::internals::primitives::sample::ScalarSample;

// ============================================================================
// Basic Behavior
// ============================================================================

#[test]
fn test_single_training_point_returns_its_response() {
    let x = [0.4];
    let y = [3.25];
    let x0 = [-1.0, 0.0, 0.4, 1.7, 100.0, -1e6];
    for &bw in &[0.01, 0.5, 1.0, 10.0] {
        let fitted = KernelMeanSmoother::smooth_points(&x, &y, &x0, bw).unwrap();
        for v in fitted {
            assert_eq!(v, 3.25);
        }
    }

    let fitted = KernelMeanSmoother::smooth_points(&[0.0], &[7.0], &[100.0], 0.1).unwrap();
    assert_eq!(fitted, vec![7.0]);

    // f32 at 20 standard deviations
    let fitted = KernelMeanSmoother::smooth_points(&[0.0f32], &[7.0], &[2.0], 0.1).unwrap();
    assert_eq!(fitted, vec![7.0f32]);
}

#[test]
fn test_small_bandwidth_approaches_nearest_neighbor() {
    let x = [0.0, 0.1, 0.2, 0.3, 0.4];
    let y = [5.0, -1.0, 2.0, 8.0, 0.5];
    let fitted = KernelMeanSmoother::smooth_points(&x, &y, &x, 0.01).unwrap();
    for (f, yi) in fitted.iter().zip(y.iter()) {
        assert_relative_eq!(*f, *yi, epsilon = 1e-12);
    }

    // Off-grid query close to 0.3 picks up y = 8
    let fitted = KernelMeanSmoother::smooth_points(&x, &y, &[0.29], 0.005).unwrap();
    assert_relative_eq!(fitted[0], 8.0, epsilon = 1e-9);
}

#[test]
fn test_large_bandwidth_approaches_global_mean() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 4.0, 9.0];
    let fitted = KernelMeanSmoother::smooth_points(&x, &y, &[1.5, -3.0], 1e6).unwrap();
    for v in fitted {
        assert_relative_eq!(v, 4.0, epsilon = 1e-6);
    }
}

#[test]
fn test_matches_weighted_average_by_hand() {
    let x = [0.0, 1.0, 3.0];
    let y = [2.0, 4.0, -1.0];
    let bw = 1.5;
    let x0 = 0.8;
    let w: Vec<f64> = x.iter().map(|&xi| gaussian_density(xi, x0, bw)).collect();
    let expected = (w[0] * y[0] + w[1] * y[1] + w[2] * y[2]) / (w[0] + w[1] + w[2]);

    let fitted = KernelMeanSmoother::smooth_points(&x, &y, &[x0], bw).unwrap();
    assert_relative_eq!(fitted[0], expected, max_relative = 1e-12);
}

#[test]
fn test_fitted_values_stay_in_response_range() {
    let x: Vec<f64> = (0..30).map(|i| i as f64 * 0.1).collect();
    let y: Vec<f64> = x.iter().map(|&v| (3.0 * v).cos() * 2.0 + v).collect();
    let x0: Vec<f64> = (0..50).map(|i| -0.5 + i as f64 * 0.08).collect();
    let lo = y.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = y.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let fitted = KernelMeanSmoother::smooth_points(&x, &y, &x0, 0.3).unwrap();
    assert_eq!(fitted.len(), x0.len());
    for v in fitted {
        assert!(v >= lo - 1e-12 && v <= hi + 1e-12);
    }
}

#[test]
fn test_empty_query_returns_empty() {
    let fitted = KernelMeanSmoother::smooth_points(&[0.0, 1.0], &[1.0, 2.0], &[], 0.5).unwrap();
    assert!(fitted.is_empty());
}

// ============================================================================
// Leave-one-out
// ============================================================================

#[test]
fn test_leave_one_out_excludes_self() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 100.0, 3.0];
    let loo = KernelMeanSmoother::smooth_leave_one_out(&x, &y, 0.5).unwrap();
    // The middle point is predicted from its symmetric neighbours only
    assert_relative_eq!(loo[1], 2.0, epsilon = 1e-12);
    // The end points are pulled towards the outlier
    assert!(loo[0] > 50.0);
}

#[test]
fn test_leave_one_out_single_point_fails() {
    let err = KernelMeanSmoother::smooth_leave_one_out(&[0.0], &[1.0], 1.0).unwrap_err();
    assert_eq!(err, KrsError::ZeroWeightSum { index: 0 });
    assert_eq!(err.kind(), ErrorKind::Numerical);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_far_query_takes_nearest_response() {
    let fitted =
        KernelMeanSmoother::smooth_points(&[0.0, 0.1], &[1.0, 2.0], &[0.05, 50.0, -50.0], 0.01)
            .unwrap();
    assert_relative_eq!(fitted[0], 1.5, epsilon = 1e-12);
    assert_eq!(fitted[1], 2.0);
    assert_eq!(fitted[2], 1.0);

    let loo = KernelMeanSmoother::smooth_leave_one_out(&[0.0, 500.0], &[1.0, 2.0], 0.01).unwrap();
    assert_eq!(loo, vec![2.0, 1.0]);
}

#[test]
fn test_invalid_arguments() {
    assert!(matches!(
        KernelMeanSmoother::smooth_points(&[0.0], &[1.0], &[0.0], 0.0),
        Err(KrsError::InvalidBandwidth(_))
    ));
    assert!(matches!(
        KernelMeanSmoother::smooth_points(&[0.0], &[1.0], &[0.0], -2.0),
        Err(KrsError::InvalidBandwidth(_))
    ));
    assert_eq!(
        KernelMeanSmoother::smooth_points::<f64>(&[], &[], &[0.0], 1.0),
        Err(KrsError::EmptyInput)
    );
    assert!(matches!(
        KernelMeanSmoother::smooth_points(&[0.0, 1.0], &[1.0], &[0.0], 1.0),
        Err(KrsError::MismatchedInputs { .. })
    ));
    assert!(matches!(
        KernelMeanSmoother::smooth_points(&[0.0], &[1.0], &[f64::NAN], 1.0),
        Err(KrsError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Smoother Trait
// ============================================================================

#[test]
fn test_smoother_trait_delegates() {
    let sample = ScalarSample::new(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0]).unwrap();
    let query = vec![0.5, 1.5];
    let smoother = KernelMeanSmoother::new();
    let via_trait = Smoother::<f64>::smooth(&smoother, &sample, &query, &0.7).unwrap();
    let direct = KernelMeanSmoother::smooth_points(&sample.x, &sample.y, &query, 0.7).unwrap();
    assert_eq!(via_trait, direct);
    assert_eq!(Smoother::<f64>::name(&smoother), "kernel mean");
    assert!(Smoother::<f64>::validate_param(&smoother, &0.0).is_err());
}

#[test]
fn test_f32_support() {
    let x = [0.0f32, 1.0, 2.0];
    let y = [1.0f32, 2.0, 3.0];
    let fitted = KernelMeanSmoother::smooth_points(&x, &y, &[1.0], 0.8).unwrap();
    assert_relative_eq!(fitted[0], 2.0, epsilon = 1e-6);
}
