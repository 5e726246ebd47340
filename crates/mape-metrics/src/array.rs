use ndarray::{ArrayBase, Data, Dimension, Zip};
use num_traits::Float;

use crate::{error::MetricsError, reduce::mean, scalar::absolute_percentage_error};

/// Compute the Mean Absolute Percentage Error (MAPE) between two arrays.
///
/// The MAPE is defined as:
///
/// $ MAPE(p, t) = \frac{1}{N} \sum_{i=1}^{N} e(p_i, t_i) $
///
/// where `e` is the [`absolute_percentage_error`] of a single element, which
/// falls back to $|p_i|$ where $t_i = 0$, and `N` is the number of elements.
///
/// # Arguments
///
/// * `predicted` - The predicted values, of any dimensionality.
/// * `truth` - The ground truth values, with the same shape as `predicted`.
///
/// # Returns
///
/// The MAPE as a fraction, where `1.0` means 100%. Empty arrays give NaN.
///
/// # Errors
///
/// If the two arrays have different shapes, a [`MetricsError::ShapeMismatch`] is returned.
/// No broadcasting is performed.
///
/// # Example
///
/// ```
/// use ndarray::Array2;
/// use mape_metrics::mape_array;
///
/// let truth = Array2::<f64>::from_elem((3, 3), 2.0);
/// let mut predicted = truth.clone();
/// predicted[[0, 0]] = 0.0;
///
/// let error = mape_array(&predicted, &truth).unwrap();
/// assert!((error - 1.0 / 9.0).abs() < 1e-12);
/// ```
pub fn mape_array<T, S1, S2, D>(
    predicted: &ArrayBase<S1, D>,
    truth: &ArrayBase<S2, D>,
) -> Result<T, MetricsError>
where
    T: Float,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    D: Dimension,
{
    if predicted.shape() != truth.shape() {
        return Err(MetricsError::ShapeMismatch(predicted.shape().to_vec(), truth.shape().to_vec()));
    }

    let sum = Zip::from(predicted)
        .and(truth)
        .fold(T::zero(), |acc, &p, &t| {
            acc + absolute_percentage_error(p, t)
        });

    Ok(mean(sum, truth.len()))
}
