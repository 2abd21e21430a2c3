//! # Specify CLI
//!
//! A CLI tool that bootstraps a new feature workspace inside a repository in a
//! single pass: it resolves the repository root, migrates a plain repository
//! into a `workspace/source` + `workspace/worktree` layout on first use,
//! allocates the next sequential feature number, slugs the free-text
//! description into a branch name, provisions an isolated working copy (a git
//! worktree when git is available, a plain directory otherwise), and
//! materializes a spec file from a template.
//!
//! ## Quick Start
//!
//! ```bash
//! # Bootstrap a feature workspace from a description
//! specify "Add OAuth2 login"
//!
//! # Same, but emit a single machine-readable JSON line
//! specify --json add oauth2 login
//!
//! # Install the shell wrapper (exports SPECIFY_FEATURE and cd's for you)
//! eval "$(specify-bin init bash)"
//! ```
//!
//! ## Module Structure
//!
//! - [`commands`] - Command implementations (the provisioning pass, shell integration)
//! - [`workspace`] - Repository root location, layout classification, and migration
//! - [`feature`] - Feature numbering and branch name derivation
//! - [`config`] - Optional `.specify/config.toml` project configuration
//! - [`git`] - Git operations wrapper using the git2 crate
//! - [`report`] - Result reporting (human-readable lines or one JSON record)
//! - [`traits`] - Defines GitOperations trait for testability and abstraction

pub mod commands;
pub mod config;
pub mod error;
pub mod feature;
pub mod git;
pub mod report;
pub mod traits;
pub mod workspace;

pub use anyhow::Result;
pub use error::SpecifyError;
