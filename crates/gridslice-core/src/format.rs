//! Text rendering for tensors and matrices.
//!
//! Every element is right-justified to the width of the longest element so
//! that columns line up. Matrices can additionally be truncated with
//! [`PrintOptions`], keeping the leading and trailing edge items of each axis.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

const ELLIPSIS: &str = "...";

/// Limits applied when rendering a matrix.
///
/// `max_rows` / `max_cols` count the edge items kept on *each* side of an
/// elided axis. An axis is only elided once it holds more than twice that many.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PrintOptions {
    pub max_rows: Option<usize>,
    pub max_cols: Option<usize>,
}

impl PrintOptions {
    pub fn new(max_rows: Option<usize>, max_cols: Option<usize>) -> Self {
        Self { max_rows, max_cols }
    }
}

fn max_width<T: Display>(elements: &[T]) -> usize {
    elements
        .iter()
        .map(|e| e.to_string().chars().count())
        .max()
        .unwrap_or(0)
}

/// Positions to print along an axis of `len` items; `None` marks an elision.
fn visible_positions(len: usize, edge: Option<usize>) -> Vec<Option<usize>> {
    match edge {
        Some(edge) if edge < len.saturating_sub(edge) => (0..edge)
            .map(Some)
            .chain(std::iter::once(None))
            .chain((len - edge..len).map(Some))
            .collect(),
        _ => (0..len).map(Some).collect(),
    }
}

/// Flat rendering used by [`crate::Tensor`]: one indented line of elements.
pub(crate) fn render_flat<T: Display>(elements: &[T]) -> String {
    if elements.is_empty() {
        return "[\n]".to_string();
    }
    let width = max_width(elements);
    let body = elements
        .iter()
        .map(|e| format!("{:>width$}", e.to_string(), width = width))
        .collect::<Vec<_>>()
        .join("  ");
    format!("[\n  {}\n]", body)
}

/// Grid rendering used by [`crate::Matrix`]: one line per row, rows separated
/// by a blank line.
pub(crate) fn render_grid<T: Display>(
    elements: &[T],
    rows: usize,
    cols: usize,
    options: &PrintOptions,
) -> String {
    if elements.is_empty() {
        return "[\n]".to_string();
    }
    let width = max_width(elements);
    let columns = visible_positions(cols, options.max_cols);

    let lines: Vec<String> = visible_positions(rows, options.max_rows)
        .into_iter()
        .map(|row| match row {
            None => format!(" {}", ELLIPSIS),
            Some(row) => {
                let cells: Vec<String> = columns
                    .iter()
                    .map(|col| match col {
                        None => format!("{:>width$}", ELLIPSIS, width = width),
                        Some(col) => format!(
                            "{:>width$}",
                            elements[row * cols + col].to_string(),
                            width = width
                        ),
                    })
                    .collect();
                format!(" {}", cells.join("  "))
            }
        })
        .collect();

    format!("[\n{}\n]", lines.join("\n\n"))
}
