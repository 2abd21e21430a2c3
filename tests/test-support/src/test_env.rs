#![allow(clippy::unwrap_used)] // Tests use unwrap for simplicity

use anyhow::{Context, Result};
use assert_fs::TempDir;
use assert_fs::prelude::*;

use std::process::Command;

/// Test environment with a temporary repository for exercising the CLI.
///
/// Three fixtures cover the layouts the tool distinguishes: an unstructured
/// git repository (the migration path), an already-migrated workspace without
/// git (the degraded path), and an unstructured directory without git (the
/// fatal path).
pub struct CliTestEnvironment {
    /// Directory the CLI is invoked from; also where templates and spec
    /// directories are seeded before a run
    pub repo_dir: assert_fs::fixture::ChildPath,
    temp_dir: TempDir,
}

impl CliTestEnvironment {
    /// Creates an unstructured git repository with an initial commit.
    ///
    /// Running the CLI from it exercises the full migration path.
    ///
    /// # Errors
    /// Returns an error if the temporary directory or the git repository
    /// cannot be set up.
    pub fn new_git_repo() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
        let repo_dir = temp_dir.child("proj");
        repo_dir.create_dir_all()?;

        Self::run_git_command(&repo_dir, &["init"])?;
        Self::run_git_command(&repo_dir, &["config", "user.name", "Test User"])?;
        Self::run_git_command(&repo_dir, &["config", "user.email", "test@example.com"])?;

        repo_dir.child("README.md").write_str("# Test Repo")?;
        Self::run_git_command(&repo_dir, &["add", "."])?;
        Self::run_git_command(&repo_dir, &["commit", "-m", "Initial commit"])?;

        // Ensure we have a main branch (some git versions default to 'master')
        Self::run_git_command(&repo_dir, &["branch", "-M", "main"])?;

        Ok(Self { repo_dir, temp_dir })
    }

    /// Creates an already-migrated workspace layout with a `.specify` marker
    /// and no git repository.
    ///
    /// # Errors
    /// Returns an error if the directories cannot be created.
    pub fn new_workspace_without_git() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
        let repo_dir = temp_dir.child("workspace").child("source");
        repo_dir.create_dir_all()?;
        repo_dir.child(".specify").create_dir_all()?;
        temp_dir.child("workspace").child("worktree").create_dir_all()?;

        Ok(Self { repo_dir, temp_dir })
    }

    /// Creates an unstructured directory with a `.specify` marker and no git
    /// repository. Provisioning from it must fail: migration needs git.
    ///
    /// # Errors
    /// Returns an error if the directories cannot be created.
    pub fn new_unstructured_without_git() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
        let repo_dir = temp_dir.child("proj");
        repo_dir.create_dir_all()?;
        repo_dir.child(".specify").create_dir_all()?;

        Ok(Self { repo_dir, temp_dir })
    }

    /// Run a git command in the repository directory
    fn run_git_command(repo_path: &assert_fs::fixture::ChildPath, args: &[&str]) -> Result<()> {
        let output = Command::new("git")
            .args(args)
            .current_dir(repo_path.path())
            .output()
            .context("Failed to execute git command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Git command failed: {}", stderr);
        }

        Ok(())
    }

    /// Execute the CLI from the repository directory
    ///
    /// # Errors
    /// Returns an error if the binary cannot be located
    pub fn run_command(&self, args: &[&str]) -> Result<assert_cmd::Command> {
        self.run_command_in(self.repo_dir.path(), args)
    }

    /// Execute the CLI from an arbitrary directory (used after migration has
    /// moved the original repository path away)
    ///
    /// # Errors
    /// Returns an error if the binary cannot be located
    pub fn run_command_in(
        &self,
        dir: &std::path::Path,
        args: &[&str],
    ) -> Result<assert_cmd::Command> {
        let mut cmd = assert_cmd::Command::cargo_bin("specify-bin")
            .context("Failed to find specify-bin binary")?;

        cmd.current_dir(dir);
        cmd.args(args);
        Ok(cmd)
    }

    /// Seeds a spec template under the repository's `.specify/templates/`
    ///
    /// # Errors
    /// Returns an error if the template cannot be written
    pub fn write_template(&self, content: &str) -> Result<()> {
        let templates = self.repo_dir.child(".specify").child("templates");
        templates.create_dir_all()?;
        templates.child("spec-template.md").write_str(content)?;
        Ok(())
    }

    /// Seeds a pre-existing feature directory under the repository's specs dir
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created
    pub fn seed_feature_dir(&self, specs_dir: &str, name: &str) -> Result<()> {
        self.repo_dir.child(specs_dir).child(name).create_dir_all()?;
        Ok(())
    }

    /// The workspace directory (exists after migration, or from the start in
    /// the workspace fixtures)
    pub fn workspace_dir(&self) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child("workspace")
    }

    /// The `workspace/source` directory
    pub fn source_dir(&self) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child("workspace").child("source")
    }

    /// Path of the worktree provisioned for a branch
    pub fn worktree_path(&self, branch_name: &str) -> assert_fs::fixture::ChildPath {
        self.workspace_dir().child("worktree").child(branch_name)
    }
}
