use anyhow::{Context, Result};
use git2::{BranchType, Repository};
use std::path::Path;

use crate::traits::GitOperations;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discovers a git repository from the specified path, walking upward
    ///
    /// # Errors
    /// Returns an error if no repository is found between `path` and the
    /// filesystem root. Absence of a repository is the supported degraded
    /// mode, so callers typically treat this as "git unavailable" rather
    /// than a fatal condition.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).context("No git repository found")?;
        Ok(Self { repo })
    }

    /// Top-level directory of the working copy the repository was discovered
    /// from. For a worktree checkout this is the worktree path, not the
    /// shared object store.
    #[must_use]
    pub fn toplevel(&self) -> &Path {
        self.repo.workdir().unwrap_or_else(|| self.repo.path())
    }

    /// Checks if a local branch exists in the repository
    ///
    /// # Errors
    /// Returns an error if git operations fail
    pub fn branch_exists(&self, branch_name: &str) -> Result<bool> {
        match self.repo.find_branch(branch_name, BranchType::Local) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Creates a new branch at HEAD and checks it out as a worktree at the
    /// specified path
    ///
    /// # Errors
    /// Returns an error if:
    /// - The branch already exists
    /// - HEAD cannot be resolved to a commit (e.g. an empty repository)
    /// - The worktree cannot be created at the target path
    pub fn create_worktree(&self, branch_name: &str, worktree_path: &Path) -> Result<()> {
        let head = self.repo.head().context("Failed to resolve HEAD")?;
        let commit = head
            .peel_to_commit()
            .context("HEAD does not point to a commit")?;
        self.repo
            .branch(branch_name, &commit, false)
            .with_context(|| format!("Failed to create branch '{}'", branch_name))?;

        let branch = self
            .repo
            .find_branch(branch_name, BranchType::Local)
            .with_context(|| format!("Failed to find branch '{}'", branch_name))?;

        // Use the directory name as the worktree name to avoid filesystem conflicts
        let worktree_name = worktree_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(branch_name);

        let mut opts = git2::WorktreeAddOptions::new();
        opts.reference(Some(branch.get()));

        self.repo
            .worktree(worktree_name, worktree_path, Some(&opts))?;

        Ok(())
    }
}

impl GitOperations for GitRepo {
    fn branch_exists(&self, branch_name: &str) -> Result<bool> {
        self.branch_exists(branch_name)
    }

    fn create_worktree(&self, branch_name: &str, worktree_path: &Path) -> Result<()> {
        self.create_worktree(branch_name, worktree_path)
    }
}
