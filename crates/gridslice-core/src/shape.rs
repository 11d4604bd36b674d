//! Shape of a dense tensor.

use std::fmt;

/// Ordered per-axis sizes of a tensor. The number of entries is the rank.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(dims: Vec<usize>) -> Self {
        Shape(dims)
    }

    /// The zero-rank shape `()`.
    pub fn scalar() -> Self {
        Shape(Vec::new())
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Product of all dimensions. The empty product is 1.
    ///
    /// `None` when the product does not fit in `usize`.
    pub fn numel(&self) -> Option<usize> {
        if self.0.contains(&0) {
            return Some(0);
        }
        self.0.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// Whether a flat buffer of `len` elements fills this shape exactly.
    ///
    /// A zero-rank shape only accepts an empty buffer.
    pub fn accepts_len(&self, len: usize) -> bool {
        if self.0.is_empty() {
            return len == 0;
        }
        self.numel() == Some(len)
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({:?})", self.0)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl From<Vec<usize>> for Shape {
    fn from(v: Vec<usize>) -> Self {
        Shape(v)
    }
}

impl From<&[usize]> for Shape {
    fn from(s: &[usize]) -> Self {
        Shape(s.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(a: [usize; N]) -> Self {
        Shape(a.to_vec())
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape(vec![rows, cols])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_basics() {
        let s = Shape::new(vec![2, 3, 4]);
        assert_eq!(s.rank(), 3);
        assert_eq!(s.dims(), &[2, 3, 4]);
        assert_eq!(s.numel(), Some(24));
        assert!(s.accepts_len(24));
        assert!(!s.accepts_len(23));
    }

    #[test]
    fn test_scalar_shape_only_accepts_empty() {
        let s = Shape::scalar();
        assert_eq!(s.rank(), 0);
        assert_eq!(s.numel(), Some(1));
        assert!(s.accepts_len(0));
        assert!(!s.accepts_len(1));
    }

    #[test]
    fn test_zero_sized_axis() {
        let s = Shape::from((0, 10));
        assert_eq!(s.numel(), Some(0));
        assert!(s.accepts_len(0));
    }

    #[test]
    fn test_overflowing_shape_accepts_nothing() {
        let s = Shape::from([usize::MAX, 2]);
        assert_eq!(s.numel(), None);
        assert!(!s.accepts_len(0));
        assert!(!s.accepts_len(usize::MAX));

        // A zero axis keeps the product at zero regardless of order.
        assert_eq!(Shape::from([usize::MAX, 2, 0]).numel(), Some(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::from([2, 3]).to_string(), "(2, 3)");
        assert_eq!(Shape::from([5]).to_string(), "(5,)");
        assert_eq!(Shape::scalar().to_string(), "()");
    }
}
