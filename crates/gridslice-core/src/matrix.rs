use std::fmt;
use std::ops::Index as IndexOp;

use crate::error::{Error, Result};
use crate::format::{render_grid, PrintOptions};
use crate::selector::{normalize_axis, Index, Selector};
use crate::shape::Shape;
use crate::tensor::Tensor;

/// A rank-2 [`Tensor`] stored in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    tensor: Tensor<T>,
    rows: usize,
    cols: usize,
}

/// Result of [`Matrix::get`]: a single element, or a freshly gathered matrix.
#[derive(Clone, Debug, PartialEq)]
pub enum Indexed<T> {
    Scalar(T),
    Matrix(Matrix<T>),
}

impl<T> Indexed<T> {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Indexed::Scalar(_))
    }

    pub fn into_scalar(self) -> Option<T> {
        match self {
            Indexed::Scalar(value) => Some(value),
            Indexed::Matrix(_) => None,
        }
    }

    pub fn into_matrix(self) -> Option<Matrix<T>> {
        match self {
            Indexed::Scalar(_) => None,
            Indexed::Matrix(m) => Some(m),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Indexed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indexed::Scalar(value) => write!(f, "{}", value),
            Indexed::Matrix(m) => write!(f, "{}", m),
        }
    }
}

impl<T> Matrix<T> {
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Self::from_shape_vec((rows, cols), data)
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        Tensor::new(shape, data).and_then(Self::try_from)
    }

    /// Build a matrix from an arbitrary shape, which must have exactly two
    /// dimensions.
    pub fn from_shape(shape: impl Into<Shape>, data: Vec<T>) -> Result<Self> {
        let shape = shape.into();
        if shape.rank() != 2 {
            return Err(Error::InvalidRank { rank: shape.rank() });
        }
        Tensor::new(shape, data).and_then(Self::try_from)
    }

    /// Like [`Matrix::new`] but copies the caller's buffer.
    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        Self::new(rows, cols, data.to_vec())
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        self.tensor.as_slice()
    }

    pub fn as_tensor(&self) -> &Tensor<T> {
        &self.tensor
    }

    pub fn into_tensor(self) -> Tensor<T> {
        self.tensor
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.tensor.to_vec()
    }

    /// Flat offset of `(row, col)`, rejecting coordinates outside the matrix.
    pub fn coord_to_offset(&self, row: isize, col: isize) -> Result<usize> {
        let in_rows = row >= 0 && (row as usize) < self.rows;
        let in_cols = col >= 0 && (col as usize) < self.cols;
        if !(in_rows && in_cols) {
            return Err(Error::IndexOutOfRange {
                index: vec![row, col],
                shape: self.tensor.shape().clone(),
            });
        }
        Ok(row as usize * self.cols + col as usize)
    }

    /// Inverse of [`Matrix::coord_to_offset`].
    pub fn offset_to_coord(&self, offset: usize) -> Result<(usize, usize)> {
        if offset >= self.len() {
            return Err(Error::IndexOutOfRange {
                index: vec![offset as isize],
                shape: Shape::from([self.len()]),
            });
        }
        Ok((offset / self.cols, offset % self.cols))
    }

    /// Elements of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.nrows()`. Use [`Matrix::get`] for a checked read.
    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.as_slice()[start..start + self.cols]
    }

    /// Resolve `index` into one element or a new matrix.
    ///
    /// A pair of two `Single` selectors reads the element directly, without
    /// correcting negative coordinates; everything else is normalized per
    /// axis and gathered row by row into a new `(rows, cols)` matrix.
    pub fn get(&self, index: impl Into<Index>) -> Result<Indexed<T>>
    where
        T: Clone,
    {
        let index: Index = index.into();
        let (rows, cols) = match index {
            Index::Pair(Selector::Single(row), Selector::Single(col)) => {
                let offset = self.coord_to_offset(row, col)?;
                return Ok(Indexed::Scalar(self.as_slice()[offset].clone()));
            }
            index => index.into_axes(),
        };

        let row_positions = normalize_axis(&rows, self.rows)?;
        let col_positions = normalize_axis(&cols, self.cols)?;
        log::trace!(
            "Gathering {}x{} elements from a {}x{} matrix",
            row_positions.len(),
            col_positions.len(),
            self.rows,
            self.cols
        );

        let mut data = Vec::with_capacity(row_positions.len() * col_positions.len());
        for &row in &row_positions {
            for &col in &col_positions {
                let offset = self.coord_to_offset(row, col)?;
                data.push(self.as_slice()[offset].clone());
            }
        }
        Matrix::new(row_positions.len(), col_positions.len(), data).map(Indexed::Matrix)
    }

    /// Parse an indexing expression such as `"1:4, [1, 4]"` and resolve it.
    pub fn get_str(&self, expr: &str) -> Result<Indexed<T>>
    where
        T: Clone,
    {
        let index: Index = expr.parse()?;
        self.get(index)
    }

    pub fn render(&self, options: &PrintOptions) -> String
    where
        T: fmt::Display,
    {
        render_grid(self.as_slice(), self.rows, self.cols, options)
    }
}

impl<T> TryFrom<Tensor<T>> for Matrix<T> {
    type Error = Error;

    fn try_from(tensor: Tensor<T>) -> Result<Self> {
        let (rows, cols) = match tensor.shape().dims() {
            [rows, cols] => (*rows, *cols),
            dims => return Err(Error::InvalidRank { rank: dims.len() }),
        };
        Ok(Self { tensor, rows, cols })
    }
}

impl<T> From<Matrix<T>> for Tensor<T> {
    fn from(matrix: Matrix<T>) -> Self {
        matrix.tensor
    }
}

impl<T> AsRef<Tensor<T>> for Matrix<T> {
    fn as_ref(&self) -> &Tensor<T> {
        &self.tensor
    }
}

impl<T> IndexOp<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        &self.as_slice()[index.0 * self.cols + index.1]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&PrintOptions::default()))
    }
}
