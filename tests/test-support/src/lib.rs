//! Test support utilities for specify integration tests
//!
//! This crate provides shared test helpers for driving the CLI against real
//! temporary repositories. It's designed to be used only during development
//! and testing, not published.

pub mod test_env;

pub use test_env::CliTestEnvironment;
