//! Per-axis selectors and their resolution into explicit positions.
//!
//! A [`Selector`] describes which coordinates of one axis to read. Before
//! gathering, every selector is normalized into an ordered list of positions
//! with [`normalize_axis`]. Bounds are *not* checked here: a position that
//! falls outside the axis is rejected later, when the element is read.
//!
//! Selectors can also be parsed from the usual slice notation, e.g.
//! `"-2::-2, 1:4"` or `":, [1, 4]"`.

use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};
use std::str::FromStr;

use crate::error::{Error, Result};

/// `start:stop:step` with every part optional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SliceRange {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceRange {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// `:`, the whole axis in order.
    pub fn full() -> Self {
        Self::default()
    }

    /// Resolve against an axis of `len` items into concrete
    /// `(start, stop, step)`, clamping out-of-range bounds.
    pub fn indices(&self, len: usize) -> Result<(isize, isize, isize)> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(Error::ZeroSliceStep);
        }
        let len = len as isize;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = match self.start {
            Some(s) => clamp(s),
            None if step < 0 => upper,
            None => lower,
        };
        let stop = match self.stop {
            Some(s) => clamp(s),
            None if step < 0 => lower,
            None => upper,
        };
        Ok((start, stop, step))
    }

    /// Every position this range denotes on an axis of `len` items.
    pub fn positions(&self, len: usize) -> Result<Vec<isize>> {
        let (start, stop, step) = self.indices(len)?;
        let mut out = Vec::new();
        let mut next = Some(start);
        while let Some(i) = next {
            let inside = if step > 0 { i < stop } else { i > stop };
            if !inside {
                break;
            }
            out.push(i);
            // Stepping past isize bounds means the range is exhausted.
            next = i.checked_add(step);
        }
        Ok(out)
    }
}

impl fmt::Display for SliceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{}", start)?;
        }
        write!(f, ":")?;
        if let Some(stop) = self.stop {
            write!(f, "{}", stop)?;
        }
        if let Some(step) = self.step {
            write!(f, ":{}", step)?;
        }
        Ok(())
    }
}

/// Selection along a single axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// One coordinate. Negative values count from the end of the axis.
    Single(isize),
    /// Explicit coordinates, in the given order. Duplicates are allowed.
    List(Vec<isize>),
    /// A `start:stop:step` slice. Bounds are clamped to the axis.
    Range(SliceRange),
}

impl Selector {
    pub fn all() -> Self {
        Selector::Range(SliceRange::full())
    }
}

/// Expand `selector` into the ordered positions it picks on an axis of
/// `axis_size` items.
///
/// * `List` is returned verbatim.
/// * `Single(v)` with `v < 0` is shifted by `axis_size` once. It is not
///   wrapped modulo the axis size, so `-(axis_size + 1)` stays negative.
/// * `Range` follows slice semantics and never fails on its bounds.
pub fn normalize_axis(selector: &Selector, axis_size: usize) -> Result<Vec<isize>> {
    let positions = match selector {
        Selector::List(indices) => indices.clone(),
        Selector::Single(i) if *i >= 0 => vec![*i],
        Selector::Single(i) => vec![*i + axis_size as isize],
        Selector::Range(range) => range.positions(axis_size)?,
    };
    log::trace!(
        "Normalized selector {} over axis of size {} into {} position(s)",
        selector,
        axis_size,
        positions.len()
    );
    Ok(positions)
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Single(i) => write!(f, "{}", i),
            Selector::List(indices) => {
                write!(f, "[")?;
                for (n, i) in indices.iter().enumerate() {
                    if n > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", i)?;
                }
                write!(f, "]")
            }
            Selector::Range(range) => write!(f, "{}", range),
        }
    }
}

impl From<isize> for Selector {
    fn from(i: isize) -> Self {
        Selector::Single(i)
    }
}

impl From<Vec<isize>> for Selector {
    fn from(indices: Vec<isize>) -> Self {
        Selector::List(indices)
    }
}

impl From<SliceRange> for Selector {
    fn from(range: SliceRange) -> Self {
        Selector::Range(range)
    }
}

impl From<Range<isize>> for Selector {
    fn from(r: Range<isize>) -> Self {
        Selector::Range(SliceRange::new(Some(r.start), Some(r.end), None))
    }
}

impl From<RangeFrom<isize>> for Selector {
    fn from(r: RangeFrom<isize>) -> Self {
        Selector::Range(SliceRange::new(Some(r.start), None, None))
    }
}

impl From<RangeTo<isize>> for Selector {
    fn from(r: RangeTo<isize>) -> Self {
        Selector::Range(SliceRange::new(None, Some(r.end), None))
    }
}

impl From<RangeFull> for Selector {
    fn from(_: RangeFull) -> Self {
        Selector::all()
    }
}

fn unsupported(text: &str) -> Error {
    Error::UnsupportedSelectorType {
        selector: text.trim().to_string(),
    }
}

fn parse_int(text: &str, whole: &str) -> Result<isize> {
    text.trim().parse::<isize>().map_err(|_| unsupported(whole))
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if let Some(inner) = text.strip_prefix('[') {
            let inner = inner.strip_suffix(']').ok_or_else(|| unsupported(s))?;
            let mut items: Vec<&str> = inner.split(',').collect();
            if items.last().map_or(false, |last| last.trim().is_empty()) {
                items.pop();
            }
            let indices = items
                .into_iter()
                .map(|item| parse_int(item, s))
                .collect::<Result<Vec<_>>>()?;
            return Ok(Selector::List(indices));
        }

        if text.contains(':') {
            let parts: Vec<&str> = text.split(':').collect();
            if parts.len() > 3 {
                return Err(unsupported(s));
            }
            let bound = |part: Option<&&str>| -> Result<Option<isize>> {
                match part.map(|p| p.trim()) {
                    None | Some("") => Ok(None),
                    Some(p) => parse_int(p, s).map(Some),
                }
            };
            return Ok(Selector::Range(SliceRange::new(
                bound(parts.first())?,
                bound(parts.get(1))?,
                bound(parts.get(2))?,
            )));
        }

        parse_int(text, s).map(Selector::Single)
    }
}

/// A full indexing request against a matrix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Index {
    /// Row selector only. Every column is kept.
    Rows(Selector),
    /// One selector per axis, `(row, column)`.
    Pair(Selector, Selector),
}

impl Index {
    pub fn rows(rows: impl Into<Selector>) -> Self {
        Index::Rows(rows.into())
    }

    pub fn pair(rows: impl Into<Selector>, cols: impl Into<Selector>) -> Self {
        Index::Pair(rows.into(), cols.into())
    }

    /// Build a paired index from a list of per-axis selectors.
    ///
    /// Fails with [`Error::InvalidSelectorShape`] unless exactly two are given.
    pub fn from_axes(axes: Vec<Selector>) -> Result<Self> {
        let arity = axes.len();
        let mut axes = axes.into_iter();
        match (axes.next(), axes.next(), axes.next()) {
            (Some(rows), Some(cols), None) => Ok(Index::Pair(rows, cols)),
            _ => Err(Error::InvalidSelectorShape { arity }),
        }
    }

    /// Row and column selectors, with the omitted column axis spelled out as
    /// a full range.
    pub fn into_axes(self) -> (Selector, Selector) {
        match self {
            Index::Rows(rows) => (rows, Selector::all()),
            Index::Pair(rows, cols) => (rows, cols),
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Rows(rows) => write!(f, "{}", rows),
            Index::Pair(rows, cols) => write!(f, "{}, {}", rows, cols),
        }
    }
}

impl From<Selector> for Index {
    fn from(rows: Selector) -> Self {
        Index::Rows(rows)
    }
}

// A bare selector value indexes rows only.
macro_rules! impl_rows_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Index {
                fn from(rows: $ty) -> Self {
                    Index::Rows(rows.into())
                }
            }
        )*
    };
}

impl_rows_index!(
    isize,
    Vec<isize>,
    SliceRange,
    Range<isize>,
    RangeFrom<isize>,
    RangeTo<isize>,
    RangeFull,
);

impl<A, B> From<(A, B)> for Index
where
    A: Into<Selector>,
    B: Into<Selector>,
{
    fn from((rows, cols): (A, B)) -> Self {
        Index::pair(rows, cols)
    }
}

/// Split on commas that are not nested inside `[...]`.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (pos, c) in text.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&text[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

impl FromStr for Index {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = split_top_level(s);
        if parts.len() == 1 {
            return Ok(Index::Rows(parts[0].parse()?));
        }
        // A single trailing comma is allowed, as in `1, 2,`.
        if parts.last().map_or(false, |last| last.trim().is_empty()) {
            parts.pop();
        }
        let axes = parts
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<Selector>>>()?;
        Index::from_axes(axes)
    }
}
