#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! The Mean Absolute Percentage Error (MAPE) measures how far a prediction is
//! from a reference value, relative to the reference value:
//!
//! $ MAPE(p, t) = \frac{1}{N} \sum_{i=1}^{N} e(p_i, t_i) $
//!
//! The elementwise error is $|(t_i - p_i) / t_i|$, or $|p_i|$ where the true
//! value $t_i$ is zero. The result is a fraction: `1.0` means 100%.
//!
//! # Available Functions
//!
//! - [`mape`]: entry point accepting scalars, `ndarray` arrays and tensors
//! - [`mape_scalar`]: two scalars
//! - [`mape_array`]: two `ndarray` arrays of any storage and dimensionality
//! - [`mape_tensor`]: two [`mape_tensor::Tensor`]s
//! - [`absolute_percentage_error`]: the error of a single element
//!
//! # Example
//!
//! ```
//! use ndarray::Array2;
//! use mape_metrics::mape;
//!
//! let truth = Array2::<f64>::from_elem((3, 3), 2.0);
//! let predicted = truth.mapv(|x| x * 0.0);
//!
//! assert_eq!(mape(&predicted, &truth).unwrap(), 1.0);
//! assert_eq!(mape(&truth, &predicted).unwrap(), 2.0);
//! ```

/// Error types for the metrics.
pub mod error;

mod array;
mod operand;
mod reduce;
mod scalar;
mod tensor;

pub use array::mape_array;
pub use error::MetricsError;
pub use operand::{mape, ArrayOperand, Operand, OperandKind};
pub use scalar::{absolute_percentage_error, mape_scalar};
pub use tensor::mape_tensor;
