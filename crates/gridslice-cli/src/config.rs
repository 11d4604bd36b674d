use anyhow::{Context, Result};
use gridslice_core::{Matrix, PrintOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::demo::DEMO_EXPRESSIONS;

/// Matrix and expressions used by the `demo` and `index` subcommands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub rows: usize,
    pub cols: usize,
    /// Row-major elements. Defaults to `0..rows * cols`.
    pub values: Option<Vec<String>>,
    pub expressions: Vec<String>,
    pub print: PrintOptions,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            values: None,
            expressions: DEMO_EXPRESSIONS.iter().map(|e| e.to_string()).collect(),
            print: PrintOptions::default(),
        }
    }
}

impl DemoConfig {
    /// Materialize the configured matrix.
    pub fn build_matrix(&self) -> Result<Matrix<String>> {
        let values = match &self.values {
            Some(values) => values.clone(),
            None => {
                let len = self.rows.checked_mul(self.cols).with_context(|| {
                    format!(
                        "Failed to build a {}x{} matrix: element count overflows",
                        self.rows, self.cols
                    )
                })?;
                (0..len).map(|v| v.to_string()).collect()
            }
        };
        Matrix::new(self.rows, self.cols, values).with_context(|| {
            format!(
                "Failed to build a {}x{} matrix from the configured values",
                self.rows, self.cols
            )
        })
    }
}

/// Load a demo configuration from a JSON file.
pub fn load_demo_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DemoConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Split a comma-separated `--values` argument into elements.
pub fn parse_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
