use anyhow::Result;
use std::path::Path;

/// Trait for Git operations to enable mocking in tests
pub trait GitOperations {
    fn branch_exists(&self, branch_name: &str) -> Result<bool>;
    fn create_worktree(&self, branch_name: &str, worktree_path: &Path) -> Result<()>;
}
