//! Prediction error metrics.

// External dependencies
use num_traits::Float;

/// Mean squared error between `actual` and `predicted`.
///
/// Returns zero for empty input.
pub fn mean_squared_error<T: Float>(actual: &[T], predicted: &[T]) -> T {
    debug_assert_eq!(actual.len(), predicted.len());
    if actual.is_empty() {
        return T::zero();
    }
    let sse = actual
        .iter()
        .zip(predicted.iter())
        .fold(T::zero(), |acc, (&a, &p)| {
            let e = a - p;
            acc + e * e
        });
    sse / T::from(actual.len()).unwrap()
}

/// Arithmetic mean; zero for empty input.
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    values.iter().fold(T::zero(), |acc, &v| acc + v) / T::from(values.len()).unwrap()
}
