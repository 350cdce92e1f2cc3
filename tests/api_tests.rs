use approx::assert_relative_eq;
use krs_rs::internals::algorithms::mean::KernelMeanSmoother;
use krs_rs::internals::algorithms::mean_variance::{MeanVarianceSmoother, ResidualMode};
use krs_rs::prelude::*;

fn line_data() -> (Vec<f64>, Vec<f64>) {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 4.1, 5.9, 8.2, 9.8];
    (x, y)
}

fn wave_data(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, v)| (6.0 * v).sin() + 0.1 * (((i * 31) % 17) as f64 / 8.0 - 1.0))
        .collect();
    (x, y)
}

// ============================================================================
// Kernel Regression
// ============================================================================

#[test]
fn test_fit_matches_smoother() {
    let (x, y) = line_data();
    let result = KernelRegression::new().bandwidth(1.0).build().unwrap().fit(&x, &y).unwrap();

    let expected = KernelMeanSmoother::smooth_points(&x, &y, &x, 1.0).unwrap();
    assert_eq!(result.x, x);
    assert_eq!(result.y, expected);
    assert_eq!(result.n_train, 5);
    assert_eq!(result.bandwidth, 1.0);
    assert!(result.cv_scores.is_none());
    assert_relative_eq!(result.y[0], 3.06827, epsilon = 1e-5);
}

#[test]
fn test_predict_at_query_points() {
    let (x, y) = line_data();
    let model = KernelRegression::new().bandwidth(0.8).build().unwrap();
    let x0 = [1.5, 2.5, 3.5];
    let result = model.predict(&x, &y, &x0).unwrap();

    assert_eq!(result.x, x0.to_vec());
    assert_eq!(result.y.len(), 3);
    assert_eq!(result.n_train, 5);
}

#[test]
fn test_mean_variance_method() {
    let (x, y) = wave_data(40);
    let model = KernelRegression::new()
        .bandwidth(0.3)
        .method(MeanVariance)
        .residual_mode(LeaveOneOut)
        .build()
        .unwrap();
    let result = model.fit(&x, &y).unwrap();

    let expected = MeanVarianceSmoother::with_residual_mode(ResidualMode::LeaveOneOut)
        .smooth_points(&x, &y, &x, 0.3)
        .unwrap();
    assert_eq!(result.y, expected);
    assert_eq!(result.method, "mean-variance");
}

#[test]
fn test_cross_validated_bandwidth() {
    let (x, y) = wave_data(50);
    let grid = [0.02, 0.06, 0.1, 0.5];
    let result = KernelRegression::new()
        .method(Mean)
        .cross_validate(KFold(5, &grid).seed(42))
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert!(grid.contains(&result.bandwidth));
    let scores = result.cv_scores.as_ref().unwrap();
    assert_eq!(scores.len(), 4);
    let best = scores.iter().cloned().fold(f64::INFINITY, f64::min);
    let chosen = grid.iter().position(|&g| g == result.bandwidth).unwrap();
    assert_eq!(scores[chosen], best);
}

#[test]
fn test_cross_validation_overrides_fixed_bandwidth() {
    let (x, y) = wave_data(30);
    let grid = [0.05, 0.1];
    let result = KernelRegression::new()
        .bandwidth(5.0)
        .cross_validate(LOOCV(&grid))
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    assert!(grid.contains(&result.bandwidth));
}

#[test]
fn test_builder_errors() {
    assert!(matches!(
        KernelRegression::<f64>::new().build(),
        Err(KrsError::InvalidInput(_))
    ));
    assert_eq!(
        KernelRegression::new().bandwidth(1.0).bandwidth(2.0).build().unwrap_err(),
        KrsError::DuplicateParameter { parameter: "bandwidth" }
    );
    assert!(matches!(
        KernelRegression::new().bandwidth(-1.0).build(),
        Err(KrsError::InvalidBandwidth(_))
    ));
    assert!(matches!(
        KernelRegression::new().bandwidth(1.0).residual_mode(InSample).build(),
        Err(KrsError::InvalidInput(_))
    ));

    let empty: [f64; 0] = [];
    assert_eq!(
        KernelRegression::new().cross_validate(KFold(3, &empty)).build().unwrap_err(),
        KrsError::EmptyGrid
    );
}

#[test]
fn test_fit_rejects_bad_input() {
    let model = KernelRegression::new().bandwidth(1.0).build().unwrap();
    assert!(model.fit(&[], &[]).is_err());
    assert!(matches!(
        model.fit(&[1.0, 2.0], &[1.0]),
        Err(KrsError::MismatchedInputs { .. })
    ));
    assert!(model.predict(&[1.0, 2.0], &[1.0, 2.0], &[f64::NAN]).is_err());
}

#[test]
fn test_display() {
    let (x, y) = line_data();
    let result = KernelRegression::new().bandwidth(1.0).build().unwrap().fit(&x, &y).unwrap();
    let text = format!("{}", result);
    assert!(text.contains("Summary:"));
    assert!(text.contains("  Data points: 5"));
    assert!(text.contains("  Method: kernel mean"));
    assert!(text.contains("Smoothed Data:"));
    assert!(text.contains("3.06827"));
}

// ============================================================================
// Local Linear Regression
// ============================================================================

fn planar_sample() -> DesignSample<f64> {
    let locations = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.5, 0.5, 0.2, 0.6];
    let y: Vec<f64> = locations.chunks(2).map(|p| 1.0 + p[0] + 2.0 * p[1]).collect();
    DesignSample::with_intercept(&y, &locations, 2).unwrap()
}

#[test]
fn test_local_linear_fit_and_predict() {
    let sample = planar_sample();
    let model = LocalLinearRegression::new()
        .bandwidth(BandwidthMatrix::isotropic(0.5, 2).unwrap())
        .build()
        .unwrap();

    let fit = model.fit(&sample).unwrap();
    assert_eq!(fit.y.len(), 6);
    for (p, v) in sample.locations.chunks(2).zip(fit.y.iter()) {
        assert_relative_eq!(*v, 1.0 + p[0] + 2.0 * p[1], epsilon = 1e-9);
    }

    let query = DesignQuery::with_intercept(&[0.25, 0.75], 2).unwrap();
    let pred = model.predict(&sample, &query).unwrap();
    assert_relative_eq!(pred.y[0], 2.75, epsilon = 1e-9);
    assert_eq!(pred.dims, 2);
    assert!(format!("{}", pred).contains("local linear"));
}

#[test]
fn test_local_linear_cross_validation() {
    let sample = planar_sample();
    let grid = vec![
        BandwidthMatrix::isotropic(0.5, 2).unwrap(),
        BandwidthMatrix::diagonal(&[1.0, 2.0]).unwrap(),
    ];
    let result = LocalLinearRegression::new()
        .cross_validate(KFold(3, &grid).seed(4))
        .build()
        .unwrap()
        .fit(&sample)
        .unwrap();
    assert!(grid.contains(&result.bandwidth));
    assert_eq!(result.cv_scores.unwrap().len(), 2);
}

#[test]
fn test_local_linear_builder_errors() {
    assert!(matches!(
        LocalLinearRegression::<f64>::new().build(),
        Err(KrsError::InvalidInput(_))
    ));

    let grid = vec![
        BandwidthMatrix::isotropic(0.5, 2).unwrap(),
        BandwidthMatrix::isotropic(0.5, 3).unwrap(),
    ];
    assert!(matches!(
        LocalLinearRegression::new().cross_validate(KFold(3, &grid)).build(),
        Err(KrsError::DimensionMismatch { .. })
    ));

    let h = BandwidthMatrix::isotropic(0.5, 2).unwrap();
    assert_eq!(
        LocalLinearRegression::new()
            .bandwidth(h.clone())
            .bandwidth(h)
            .build()
            .unwrap_err(),
        KrsError::DuplicateParameter { parameter: "bandwidth" }
    );
}
