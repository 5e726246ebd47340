use thiserror::Error;

use crate::operand::OperandKind;

/// An error type for the percentage error metrics.
#[derive(Error, Debug, PartialEq)]
pub enum MetricsError {
    /// One operand is a scalar and the other one is an array.
    #[error(
        "operands must both be scalar or both be array (predicted: {predicted}, truth: {truth})"
    )]
    TypeKind {
        /// Kind of the predicted operand
        predicted: OperandKind,
        /// Kind of the true operand
        truth: OperandKind,
    },

    /// Both operands are arrays but their shapes differ.
    #[error("Shape mismatch: predicted shape {0:?} does not match truth shape {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),
}
