//! gridslice-core: dense row-major tensors with NumPy-style matrix indexing.
//!
//! A [`Tensor`] owns a flat buffer and a [`Shape`]; a [`Matrix`] is the
//! rank-2 case and adds coordinate conversion plus an indexing resolver that
//! accepts integers, negative integers, slices with steps, explicit index
//! lists and `(row, column)` combinations of those.
//!
//! ```
//! use gridslice_core::{Matrix, Indexed};
//!
//! let m = Matrix::new(3, 3, (0..9).collect::<Vec<i32>>()).unwrap();
//! assert_eq!(m.get_str("1, 2").unwrap(), Indexed::Scalar(5));
//!
//! let sub = m.get_str("::-1, [0, 2]").unwrap().into_matrix().unwrap();
//! assert_eq!(sub.to_vec(), vec![6, 8, 3, 5, 0, 2]);
//! ```
pub mod error;
pub mod format;
pub mod matrix;
pub mod selector;
pub mod shape;
pub mod tensor;

pub use error::{Error, Result};
pub use format::PrintOptions;
pub use matrix::{Indexed, Matrix};
pub use selector::{normalize_axis, Index, Selector, SliceRange};
pub use shape::Shape;
pub use tensor::Tensor;
