//! The provisioning pass: one invocation takes a feature description and
//! produces a numbered branch, an isolated working copy, and a materialized
//! spec file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::SpecifyError;
use crate::feature;
use crate::git::GitRepo;
use crate::report::Report;
use crate::traits::GitOperations;
use crate::workspace;

/// Runs the full provisioning pass for a feature description and returns the
/// report to print.
///
/// Steps, in order: locate the repository root, classify its workspace
/// layout, migrate an unstructured repository, allocate the next feature
/// number, derive the branch name, provision the working copy, and
/// materialize the spec file.
///
/// # Errors
/// Every failure is terminal: missing description, unresolvable root,
/// migration without git, filesystem failures during migration, and worktree
/// creation failures all abort the run. Nothing is retried and no rollback is
/// attempted.
pub fn create_feature(description: &str) -> Result<Report> {
    let description = description.trim();
    if description.is_empty() {
        return Err(SpecifyError::MissingDescription.into());
    }

    let cwd = std::env::current_dir()?;
    let root = workspace::locate_root(&cwd)?;
    let layout = workspace::classify(&root.path);

    let (source, workspace_dir) = match workspace::source_and_workspace(&root.path, layout) {
        Some(dirs) => dirs,
        None => {
            if !root.has_git {
                return Err(SpecifyError::GitRequired(root.path.clone()).into());
            }
            let source = workspace::migrate(&root.path)?;
            // the previous working directory moved along with the repository
            std::env::set_current_dir(&source).with_context(|| {
                format!("Failed to enter migrated source at {}", source.display())
            })?;
            let workspace_dir = source
                .parent()
                .context("Migrated source has no parent directory")?
                .to_path_buf();
            (source, workspace_dir)
        }
    };

    let config = ProjectConfig::load_from_source(&source)?;
    let number = feature::next_feature_number(&source.join(&config.specs_dir));
    let branch_name = feature::branch_name(number, description);
    let worktree_path = workspace_dir.join("worktree").join(&branch_name);

    if root.has_git {
        let repo = GitRepo::discover(&source)
            .with_context(|| format!("Failed to open repository at {}", source.display()))?;
        provision_worktree(&repo, &branch_name, &worktree_path)?;
    } else {
        std::fs::create_dir_all(&worktree_path).with_context(|| {
            format!("Failed to create directory {}", worktree_path.display())
        })?;
        eprintln!("Warning: git unavailable, created a plain directory instead of a worktree");
    }

    std::env::set_current_dir(&worktree_path)
        .with_context(|| format!("Failed to enter worktree at {}", worktree_path.display()))?;

    let spec_file = materialize_spec(&source, &worktree_path, &config, &branch_name)?;

    Ok(Report {
        branch_name,
        spec_file,
        feature_num: format!("{:03}", number),
        worktree_path,
        has_git: root.has_git,
    })
}

/// Creates the branch and checks it out as a worktree at the target path.
///
/// Creation failure is fatal: the run aborts rather than degrading to a plain
/// directory, so a collision with an existing branch never leaves a working
/// copy that silently lacks version control.
fn provision_worktree(
    git: &dyn GitOperations,
    branch_name: &str,
    worktree_path: &Path,
) -> Result<()> {
    if let Some(parent) = worktree_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    if git.branch_exists(branch_name)? {
        return Err(SpecifyError::WorktreeCreation {
            branch: branch_name.to_string(),
            reason: "a branch with that name already exists".to_string(),
        }
        .into());
    }

    git.create_worktree(branch_name, worktree_path)
        .map_err(|e| SpecifyError::WorktreeCreation {
            branch: branch_name.to_string(),
            reason: e.to_string(),
        })?;

    Ok(())
}

/// Ensures `<worktree>/<specs-dir>/<branch>/spec.md` exists, copied
/// byte-for-byte from the template under the source tree or created empty
/// when no template is present.
fn materialize_spec(
    source: &Path,
    worktree_path: &Path,
    config: &ProjectConfig,
    branch_name: &str,
) -> Result<PathBuf> {
    let feature_dir = worktree_path.join(&config.specs_dir).join(branch_name);
    std::fs::create_dir_all(&feature_dir)
        .with_context(|| format!("Failed to create directory {}", feature_dir.display()))?;

    let spec_file = feature_dir.join("spec.md");
    let template = source.join(&config.template);
    if template.exists() {
        std::fs::copy(&template, &spec_file).with_context(|| {
            format!("Failed to copy template {}", template.display())
        })?;
    } else {
        std::fs::write(&spec_file, "")
            .with_context(|| format!("Failed to create {}", spec_file.display()))?;
    }

    Ok(spec_file)
}
