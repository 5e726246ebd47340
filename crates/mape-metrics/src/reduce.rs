use num_traits::Float;

use crate::scalar::absolute_percentage_error;

/// Mean of the elementwise errors of two row-major buffers of equal length.
pub(crate) fn mean_absolute_percentage_error<T: Float>(predicted: &[T], truth: &[T]) -> T {
    debug_assert_eq!(predicted.len(), truth.len());
    let sum = predicted
        .iter()
        .zip(truth.iter())
        .fold(T::zero(), |acc, (&p, &t)| {
            acc + absolute_percentage_error(p, t)
        });
    mean(sum, truth.len())
}

/// Divide an accumulated error by the number of elements.
///
/// An empty input has no defined mean and yields NaN.
pub(crate) fn mean<T: Float>(sum: T, count: usize) -> T {
    if count == 0 {
        log::warn!("MAPE over zero elements is undefined, returning NaN");
        return T::nan();
    }
    num_traits::cast::<usize, T>(count).map_or_else(T::nan, |n| sum / n)
}
