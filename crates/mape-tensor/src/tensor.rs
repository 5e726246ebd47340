use num_traits::Zero;
use thiserror::Error;

/// Error type for tensor creation.
#[derive(Error, Debug, PartialEq)]
pub enum TensorError {
    /// Tensor shape does not match the provided data.
    ///
    /// The product of the shape dimensions must equal the number of elements.
    #[error(
        "Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data"
    )]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },
}

impl TensorError {
    /// Creates an InvalidShape error with clear context.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }
}

/// Computes the strides for a row-major (C-contiguous) tensor layout.
///
/// The rightmost dimension has stride 1, and each dimension's stride is the
/// product of all dimensions to its right.
///
/// # Examples
///
/// ```rust
/// use mape_tensor::get_strides_from_shape;
///
/// assert_eq!(get_strides_from_shape([2, 3]), [3, 1]);
/// assert_eq!(get_strides_from_shape([2, 3, 4]), [12, 4, 1]);
/// ```
pub fn get_strides_from_shape<const N: usize>(shape: [usize; N]) -> [usize; N] {
    let mut strides: [usize; N] = [0; N];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// A multi-dimensional array (tensor) with owned data.
///
/// # Type Parameters
///
/// * `T` - The element type stored in the tensor
/// * `N` - The number of dimensions (const generic, checked at compile time)
///
/// Data is always stored contiguously in row-major order, so `as_slice`
/// yields elements in logical order.
///
/// # Examples
///
/// ```rust
/// use mape_tensor::Tensor2;
///
/// let data: Vec<u8> = vec![1, 2, 3, 4];
/// let t = Tensor2::<u8>::from_shape_vec([2, 2], data).unwrap();
/// assert_eq!(t.shape, [2, 2]);
/// assert_eq!(t.get([1, 0]), Some(&3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T, const N: usize> {
    data: Vec<T>,
    /// The shape of the tensor.
    pub shape: [usize; N],
}

impl<T, const N: usize> Tensor<T, N> {
    /// Creates a new `Tensor` with the given shape and data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape of the tensor,
    /// an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use mape_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(t.numel(), 4);
    ///
    /// assert!(Tensor2::<u8>::from_shape_vec([2, 3], vec![1, 2, 3, 4]).is_err());
    /// ```
    pub fn from_shape_vec(shape: [usize; N], data: Vec<T>) -> Result<Self, TensorError> {
        let numel = shape.iter().product::<usize>();
        if numel != data.len() {
            return Err(TensorError::invalid_shape(numel, data.len()));
        }
        Ok(Self { data, shape })
    }

    /// Creates a new `Tensor` with the given shape and slice of data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape of the tensor,
    /// an error is returned.
    pub fn from_shape_slice(shape: [usize; N], data: &[T]) -> Result<Self, TensorError>
    where
        T: Clone,
    {
        Self::from_shape_vec(shape, data.to_vec())
    }

    /// Creates a new `Tensor` with the given shape filled with `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use mape_tensor::Tensor2;
    ///
    /// let t = Tensor2::from_shape_val([3, 3], 2.0f64);
    /// assert_eq!(t.numel(), 9);
    /// assert!(t.iter().all(|&x| x == 2.0));
    /// ```
    pub fn from_shape_val(shape: [usize; N], value: T) -> Self
    where
        T: Clone,
    {
        let numel = shape.iter().product::<usize>();
        Self {
            data: vec![value; numel],
            shape,
        }
    }

    /// Creates a new `Tensor` with the given shape and a function to generate the data.
    ///
    /// The function `f` is called with the index of each element in row-major order.
    ///
    /// # Example
    ///
    /// ```
    /// use mape_tensor::Tensor2;
    ///
    /// let t = Tensor2::from_shape_fn([2, 2], |[i, j]| (i * 2 + j) as u8);
    /// assert_eq!(t.as_slice(), &[0, 1, 2, 3]);
    /// ```
    pub fn from_shape_fn<F>(shape: [usize; N], f: F) -> Self
    where
        F: Fn([usize; N]) -> T,
    {
        let numel = shape.iter().product::<usize>();
        let data = (0..numel)
            .map(|i| {
                let mut index = [0; N];
                let mut j = i;
                for k in (0..N).rev() {
                    index[k] = j % shape[k];
                    j /= shape[k];
                }
                f(index)
            })
            .collect();
        Self { data, shape }
    }

    /// Creates a new `Tensor` filled with zeros.
    pub fn zeros(shape: [usize; N]) -> Self
    where
        T: Zero + Clone,
    {
        Self::from_shape_val(shape, T::zero())
    }

    /// Returns the tensor data as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the elements of the tensor in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the tensor and returns the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the number of elements in the tensor.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Get the element at the given index, or `None` if out of bounds.
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        let strides = get_strides_from_shape(self.shape);
        let mut offset = 0;
        for ((&idx, dim_size), stride) in index.iter().zip(self.shape).zip(strides) {
            if idx >= dim_size {
                return None;
            }
            offset += idx * stride;
        }
        self.data.get(offset)
    }

    /// Apply a function to each element, producing a tensor of the same shape.
    ///
    /// # Example
    ///
    /// ```
    /// use mape_tensor::Tensor1;
    ///
    /// let t = Tensor1::from_shape_vec([3], vec![1.0f32, 2.0, 3.0]).unwrap();
    /// let scaled = t.map(|x| x * 100.0);
    /// assert_eq!(scaled.as_slice(), &[100.0, 200.0, 300.0]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Tensor<U, N>
    where
        F: Fn(&T) -> U,
    {
        Tensor {
            data: self.data.iter().map(f).collect(),
            shape: self.shape,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tensor::TensorError;
    use crate::{Tensor1, Tensor2, Tensor3};

    #[test]
    fn constructor_1d() -> Result<(), TensorError> {
        let t = Tensor1::<u8>::from_shape_vec([1], vec![1])?;
        assert_eq!(t.shape, [1]);
        assert_eq!(t.as_slice(), vec![1]);
        assert_eq!(t.numel(), 1);
        Ok(())
    }

    #[test]
    fn constructor_3d() -> Result<(), TensorError> {
        let t = Tensor3::<u8>::from_shape_slice([2, 1, 3], &[0, 1, 2, 3, 4, 5])?;
        assert_eq!(t.get([1, 0, 2]), Some(&5));
        assert_eq!(t.get([0, 0, 1]), Some(&1));
        Ok(())
    }

    #[test]
    fn constructor_wrong_len() {
        let res = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3]);
        assert_eq!(res, Err(TensorError::invalid_shape(4, 3)));
    }

    #[test]
    fn constructor_empty() -> Result<(), TensorError> {
        let t = Tensor2::<f32>::from_shape_vec([0, 3], vec![])?;
        assert_eq!(t.numel(), 0);
        assert_eq!(t.get([0, 0]), None);
        Ok(())
    }

    #[test]
    fn get_2d() -> Result<(), TensorError> {
        let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4])?;
        assert_eq!(t.get([0, 0]), Some(&1));
        assert_eq!(t.get([0, 1]), Some(&2));
        assert_eq!(t.get([1, 0]), Some(&3));
        assert_eq!(t.get([1, 1]), Some(&4));
        assert!(t.get([2, 0]).is_none());
        assert!(t.get([0, 2]).is_none());
        Ok(())
    }

    #[test]
    fn from_shape_fn_row_major() {
        let t = Tensor2::from_shape_fn([2, 3], |[i, j]| i * 10 + j);
        assert_eq!(t.into_vec(), vec![0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn zeros() {
        let t = Tensor2::<f64>::zeros([3, 3]);
        assert_eq!(t.numel(), 9);
        assert!(t.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn map_keeps_shape() {
        let t = Tensor2::from_shape_val([2, 3], 2.0f32);
        let negated = t.map(|x| -x);
        assert_eq!(negated.shape, [2, 3]);
        assert!(negated.iter().all(|&x| x == -2.0));
    }
}
