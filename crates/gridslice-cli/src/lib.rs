//! gridslice-cli: command line front end for `gridslice-core`.
//!
//! Builds a matrix from a [`config::DemoConfig`] and evaluates indexing
//! expressions against it, printing every result.
pub mod config;
pub mod demo;
