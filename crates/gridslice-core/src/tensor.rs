use std::fmt;

use num_traits::Zero;

use crate::error::{Error, Result};
use crate::format::render_flat;
use crate::shape::Shape;

/// Dense row-major N-dimensional array over a single flat buffer.
///
/// A `Tensor` owns its elements and is never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T> Tensor<T> {
    /// Build a tensor that takes ownership of `data`.
    ///
    /// Fails with [`Error::DimensionMismatch`] unless `data` fills `shape`
    /// exactly. A zero-rank shape only accepts an empty buffer.
    pub fn new(shape: impl Into<Shape>, data: Vec<T>) -> Result<Self> {
        let shape = shape.into();
        if !shape.accepts_len(data.len()) {
            return Err(Error::DimensionMismatch {
                shape,
                len: data.len(),
            });
        }
        log::debug!("Created tensor with shape {} ({} elements)", shape, data.len());
        Ok(Self { shape, data })
    }

    /// Build a tensor from a borrowed buffer, cloning every element so the
    /// tensor never shares storage with the caller.
    pub fn from_slice(shape: impl Into<Shape>, data: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        Self::new(shape, data.to_vec())
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Tensor<T>
where
    T: Clone + Zero,
{
    /// Tensor of `shape` filled with zeros. A zero-rank shape yields an
    /// empty tensor.
    ///
    /// # Panics
    ///
    /// Panics if the element count overflows `usize`, like `vec!` does.
    pub fn zeros(shape: impl Into<Shape>) -> Self {
        let shape = shape.into();
        let len = match shape.numel() {
            _ if shape.rank() == 0 => 0,
            Some(len) => len,
            None => panic!("shape {} has too many elements", shape),
        };
        Self {
            shape,
            data: vec![T::zero(); len],
        }
    }
}

impl<T: fmt::Display> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_flat(&self.data))
    }
}
