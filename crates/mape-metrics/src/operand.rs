use std::{borrow::Cow, fmt};

use mape_tensor::Tensor;
use ndarray::{ArrayBase, Data, Dimension};
use num_traits::Float;

use crate::{error::MetricsError, reduce::mean_absolute_percentage_error, scalar::mape_scalar};

/// The kind of an [`Operand`], used to report kind mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// A single real number.
    Scalar,
    /// An n-dimensional array of real numbers.
    Array,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::Scalar => write!(f, "scalar"),
            OperandKind::Array => write!(f, "array"),
        }
    }
}

/// Shape and row-major data of an array operand.
///
/// Built from an `ndarray` array or a [`Tensor`] through the `From`
/// conversions of [`Operand`], so the data length always matches the shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayOperand<'a, T: Clone> {
    shape: Vec<usize>,
    data: Cow<'a, [T]>,
}

impl<T: Clone> ArrayOperand<'_, T> {
    /// The shape of the array.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The elements of the array in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

/// An input of the percentage error calculator: either a scalar or an array.
///
/// # Example
///
/// ```
/// use ndarray::Array2;
/// use mape_metrics::{Operand, OperandKind};
///
/// let scalar = Operand::from(2.0f64);
/// assert_eq!(scalar.kind(), OperandKind::Scalar);
///
/// let a = Array2::<f64>::zeros((2, 3));
/// let array = Operand::from(&a);
/// assert_eq!(array.kind(), OperandKind::Array);
/// assert_eq!(array.shape(), &[2, 3]);
/// assert_eq!(array.numel(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<'a, T: Clone> {
    /// A single real number.
    Scalar(T),
    /// An n-dimensional array.
    Array(ArrayOperand<'a, T>),
}

impl<T: Clone> Operand<'_, T> {
    /// Whether the operand is a scalar or an array.
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Scalar(_) => OperandKind::Scalar,
            Operand::Array(_) => OperandKind::Array,
        }
    }

    /// The shape of the operand; empty for scalars.
    pub fn shape(&self) -> &[usize] {
        match self {
            Operand::Scalar(_) => &[],
            Operand::Array(array) => array.shape(),
        }
    }

    /// The number of elements of the operand; 1 for scalars.
    pub fn numel(&self) -> usize {
        match self {
            Operand::Scalar(_) => 1,
            Operand::Array(array) => array.data.len(),
        }
    }
}

impl From<f32> for Operand<'_, f32> {
    fn from(value: f32) -> Self {
        Operand::Scalar(value)
    }
}

impl From<f64> for Operand<'_, f64> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a, T, S, D> From<&'a ArrayBase<S, D>> for Operand<'a, T>
where
    T: Clone,
    S: Data<Elem = T>,
    D: Dimension,
{
    fn from(array: &'a ArrayBase<S, D>) -> Self {
        // non-standard layouts are copied in logical order
        let data = match array.as_slice() {
            Some(slice) => Cow::Borrowed(slice),
            None => Cow::Owned(array.iter().cloned().collect()),
        };
        Operand::Array(ArrayOperand {
            shape: array.shape().to_vec(),
            data,
        })
    }
}

impl<'a, T: Clone, const N: usize> From<&'a Tensor<T, N>> for Operand<'a, T> {
    fn from(tensor: &'a Tensor<T, N>) -> Self {
        Operand::Array(ArrayOperand {
            shape: tensor.shape.to_vec(),
            data: Cow::Borrowed(tensor.as_slice()),
        })
    }
}

/// Compute the Mean Absolute Percentage Error (MAPE) between two operands.
///
/// Accepts scalars, `ndarray` arrays and tensors, as long as both operands
/// are of the same kind. The elementwise error falls back to the absolute
/// error where the true value is zero, see [`crate::absolute_percentage_error`].
///
/// # Arguments
///
/// * `predicted` - The predicted value.
/// * `truth` - The ground truth value.
///
/// # Returns
///
/// The MAPE as a fraction, where `1.0` means 100%. The result is always a
/// scalar, whatever the dimensionality of the inputs.
///
/// # Errors
///
/// * [`MetricsError::TypeKind`] if one operand is a scalar and the other an array.
/// * [`MetricsError::ShapeMismatch`] if both are arrays with different shapes.
///
/// # Example
///
/// ```
/// use ndarray::Array2;
/// use mape_metrics::{mape, MetricsError};
///
/// let a = Array2::<f64>::from_elem((3, 3), 2.0);
/// let negated = a.mapv(|x| -x);
///
/// assert_eq!(mape(&a, &a).unwrap(), 0.0);
/// assert_eq!(mape(&negated, &a).unwrap(), 2.0);
/// assert_eq!(mape(0.0f64, 2.0f64).unwrap(), 1.0);
///
/// assert!(matches!(mape(2.0f64, &a), Err(MetricsError::TypeKind { .. })));
/// ```
pub fn mape<'a, 'b, T, P, G>(predicted: P, truth: G) -> Result<T, MetricsError>
where
    T: Float + 'a + 'b,
    P: Into<Operand<'a, T>>,
    G: Into<Operand<'b, T>>,
{
    let predicted = predicted.into();
    let truth = truth.into();

    log::debug!(
        "computing MAPE: predicted {} {:?}, truth {} {:?}",
        predicted.kind(),
        predicted.shape(),
        truth.kind(),
        truth.shape()
    );

    match (&predicted, &truth) {
        (Operand::Scalar(p), Operand::Scalar(t)) => Ok(mape_scalar(*p, *t)),
        (Operand::Array(p), Operand::Array(t)) => {
            if p.shape() != t.shape() {
                return Err(MetricsError::ShapeMismatch(p.shape().to_vec(), t.shape().to_vec()));
            }
            Ok(mean_absolute_percentage_error(p.as_slice(), t.as_slice()))
        }
        _ => Err(MetricsError::TypeKind {
            predicted: predicted.kind(),
            truth: truth.kind(),
        }),
    }
}
