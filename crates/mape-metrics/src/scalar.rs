use num_traits::Float;

/// Compute the absolute percentage error of a single prediction.
///
/// The error is defined as:
///
/// $ e(p, t) = \begin{cases} |p| & \text{if } t = 0 \\ \left| \frac{t - p}{t} \right| & \text{otherwise} \end{cases} $
///
/// where `p` is the predicted value and `t` the true value. When the true
/// value is zero the absolute error is used instead, so the result is always
/// finite for finite inputs and never negative.
///
/// # Arguments
///
/// * `predicted` - The predicted value.
/// * `truth` - The ground truth value.
///
/// # Returns
///
/// The error as a fraction, where `1.0` means 100%.
///
/// # Example
///
/// ```
/// use mape_metrics::absolute_percentage_error;
///
/// assert_eq!(absolute_percentage_error(1.0f64, 2.0), 0.5);
/// assert_eq!(absolute_percentage_error(-3.0f64, 0.0), 3.0);
/// ```
#[inline]
pub fn absolute_percentage_error<T: Float>(predicted: T, truth: T) -> T {
    if truth.is_zero() {
        predicted.abs()
    } else {
        ((truth - predicted) / truth).abs()
    }
}

/// Compute the Mean Absolute Percentage Error between two scalars.
///
/// With a single element the mean reduces to the elementwise error, see
/// [`absolute_percentage_error`].
///
/// # Example
///
/// ```
/// use mape_metrics::mape_scalar;
///
/// assert_eq!(mape_scalar(2.0f32, 2.0), 0.0);
/// assert_eq!(mape_scalar(0.0f32, 2.0), 1.0);
/// assert_eq!(mape_scalar(-2.0f32, 2.0), 2.0);
/// assert_eq!(mape_scalar(2.0f32, 0.0), 2.0);
/// ```
pub fn mape_scalar<T: Float>(predicted: T, truth: T) -> T {
    absolute_percentage_error(predicted, truth)
}
