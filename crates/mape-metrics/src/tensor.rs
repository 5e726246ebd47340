use mape_tensor::Tensor;
use num_traits::Float;

use crate::{error::MetricsError, reduce::mean_absolute_percentage_error};

/// Compute the Mean Absolute Percentage Error (MAPE) between two tensors.
///
/// Same definition as [`crate::mape_array`], evaluated in a single pass over
/// the row-major data of both tensors.
///
/// # Arguments
///
/// * `predicted` - The predicted tensor.
/// * `truth` - The ground truth tensor, with the same shape as `predicted`.
///
/// # Returns
///
/// The MAPE as a fraction, where `1.0` means 100%. Empty tensors give NaN.
///
/// # Errors
///
/// If the two tensors have different shapes, a [`MetricsError::ShapeMismatch`] is returned.
///
/// # Example
///
/// ```
/// use mape_tensor::Tensor2;
/// use mape_metrics::mape_tensor;
///
/// let a = Tensor2::from_shape_val([3, 3], 2.0f32);
/// let zeros = a.map(|x| x * 0.0);
///
/// assert_eq!(mape_tensor(&a, &a).unwrap(), 0.0);
/// assert_eq!(mape_tensor(&zeros, &a).unwrap(), 1.0);
/// assert_eq!(mape_tensor(&a, &zeros).unwrap(), 2.0);
/// ```
pub fn mape_tensor<T: Float, const N: usize>(
    predicted: &Tensor<T, N>,
    truth: &Tensor<T, N>,
) -> Result<T, MetricsError> {
    if predicted.shape != truth.shape {
        return Err(MetricsError::ShapeMismatch(predicted.shape.to_vec(), truth.shape.to_vec()));
    }

    Ok(mean_absolute_percentage_error(predicted.as_slice(), truth.as_slice()))
}
