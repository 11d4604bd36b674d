use anyhow::{Context, Result};
use gridslice_core::{Indexed, Matrix};
use std::io::Write;

use crate::config::DemoConfig;

/// Indexing expressions shown by `gridslice demo`.
pub const DEMO_EXPRESSIONS: &[&str] = &[
    "1, 1",
    "1",
    "-1",
    "1:4",
    ":4",
    "4:",
    ":",
    "1:7:2",
    ":, 1",
    "1:4, 1:4",
    "1:4, :4",
    "1:4, 4:",
    "1:4, :",
    "-1:",
    "-2::-2",
    "-2::-2, 1:4",
    ":, :",
    "[1, 4]",
    ":, [1, 4]",
    "[1, 4], [1, 4]",
];

fn render(result: &Indexed<String>, config: &DemoConfig) -> String {
    match result {
        Indexed::Scalar(value) => value.clone(),
        Indexed::Matrix(m) => m.render(&config.print),
    }
}

/// Evaluate one expression and render its result.
pub fn evaluate(matrix: &Matrix<String>, expr: &str, config: &DemoConfig) -> Result<String> {
    let result = matrix
        .get_str(expr)
        .with_context(|| format!("Failed to evaluate M[{}]", expr))?;
    log::debug!("M[{}] resolved (scalar: {})", expr, result.is_scalar());
    Ok(render(&result, config))
}

/// Print the source matrix followed by every configured expression, numbered.
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let matrix = config.build_matrix()?;
    log::info!(
        "[gridslice::demo] Running {} expressions on a {}x{} matrix",
        config.expressions.len(),
        matrix.nrows(),
        matrix.ncols()
    );

    writeln!(out, "1. M")?;
    writeln!(out, "{}", matrix.render(&config.print))?;
    for (n, expr) in config.expressions.iter().enumerate() {
        writeln!(out, "\n{}. M[{}]", n + 2, expr)?;
        writeln!(out, "{}", evaluate(&matrix, expr, config)?)?;
    }
    Ok(())
}

/// Print each expression and its result. Stops at the first failure.
pub fn run_index<W: Write>(config: &DemoConfig, exprs: &[String], out: &mut W) -> Result<()> {
    let matrix = config.build_matrix()?;
    for (n, expr) in exprs.iter().enumerate() {
        if n > 0 {
            writeln!(out)?;
        }
        writeln!(out, "M[{}]", expr)?;
        writeln!(out, "{}", evaluate(&matrix, expr, config)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(config: &DemoConfig, exprs: &[&str]) -> Result<String> {
        let exprs: Vec<String> = exprs.iter().map(|e| e.to_string()).collect();
        let mut out = Vec::new();
        run_index(config, &exprs, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_scalar_expression() {
        let out = run(&DemoConfig::default(), &["1, 1"]).unwrap();
        assert_eq!(out, "M[1, 1]\n11\n");
    }

    #[test]
    fn test_list_expression() {
        let out = run(&DemoConfig::default(), &["[1, 4], [1, 4]"]).unwrap();
        assert_eq!(out, "M[[1, 4], [1, 4]]\n[\n 11  14\n\n 41  44\n]\n");
    }

    #[test]
    fn test_bad_expression_reports_context() {
        let err = run(&DemoConfig::default(), &["1, 2, 3"]).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("M[1, 2, 3]"));
        assert!(message.contains("(row, column)"));
    }

    #[test]
    fn test_demo_numbers_every_expression() {
        let config = DemoConfig::default();
        let mut out = Vec::new();
        run_demo(&config, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("1. M\n[\n  0   1"));
        assert!(out.contains("\n2. M[1, 1]\n11\n"));
        assert!(out.contains("\n21. M[[1, 4], [1, 4]]\n"));
    }
}
