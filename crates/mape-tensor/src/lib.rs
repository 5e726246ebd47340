#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `mape-tensor` provides a small owned tensor with a compile-time number of
//! dimensions and a row-major (C-contiguous) memory layout. It is the tensor
//! back-end accepted by the `mape-metrics` crate.
//!
//! # Quick Start
//!
//! ```rust
//! use mape_tensor::Tensor2;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let tensor = Tensor2::<f32>::from_shape_vec([2, 3], data).unwrap();
//!
//! assert_eq!(tensor.get([0, 0]), Some(&1.0));
//! assert_eq!(tensor.get([1, 2]), Some(&6.0));
//!
//! let negated = tensor.map(|x| -x);
//! assert_eq!(negated.as_slice(), &[-1.0, -2.0, -3.0, -4.0, -5.0, -6.0]);
//! ```
//!
//! # Type Aliases
//!
//! - [`Tensor1`]: One-dimensional tensor (vector)
//! - [`Tensor2`]: Two-dimensional tensor (matrix)
//! - [`Tensor3`]: Three-dimensional tensor
//! - [`Tensor4`]: Four-dimensional tensor

/// Tensor module containing the main tensor implementation and error types.
///
/// This module provides the core [`tensor::Tensor`] struct and related functionality.
pub mod tensor;

pub use crate::tensor::{get_strides_from_shape, Tensor, TensorError};

/// Type alias for a 1-dimensional tensor.
pub type Tensor1<T> = Tensor<T, 1>;

/// Type alias for a 2-dimensional tensor.
pub type Tensor2<T> = Tensor<T, 2>;

/// Type alias for a 3-dimensional tensor.
pub type Tensor3<T> = Tensor<T, 3>;

/// Type alias for a 4-dimensional tensor.
pub type Tensor4<T> = Tensor<T, 4>;
