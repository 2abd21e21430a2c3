//! Repository root location, workspace layout classification, and the
//! one-time migration of a plain repository into the
//! `workspace/source` + `workspace/worktree` layout.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::error::SpecifyError;
use crate::git::GitRepo;

/// Where the resolved repository root sits relative to a workspace layout.
///
/// Derived purely from path-segment names; no filesystem access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// A plain repository, not yet migrated
    Unstructured,
    /// The root is `workspace/source`
    Source,
    /// The root is `workspace/worktree/<branch>`
    Worktree,
}

/// The repository root chosen for this invocation
#[derive(Debug)]
pub struct RepoRoot {
    pub path: PathBuf,
    /// True when the root came from a git repository discovery. When false
    /// the tool runs in the degraded no-git mode.
    pub has_git: bool,
}

/// Resolves the repository root, preferring git discovery.
///
/// Falls back to an upward search for a `.git` or `.specify` entry when no
/// repository can be discovered.
///
/// # Errors
/// Returns [`SpecifyError::RootNotFound`] if the fallback search reaches the
/// filesystem root without finding a marker.
pub fn locate_root(start: &Path) -> Result<RepoRoot> {
    if let Ok(repo) = GitRepo::discover(start) {
        return Ok(RepoRoot {
            path: repo.toplevel().to_path_buf(),
            has_git: true,
        });
    }

    let mut dir = start.to_path_buf();
    loop {
        if dir.join(".git").exists() || dir.join(".specify").exists() {
            return Ok(RepoRoot {
                path: dir,
                has_git: false,
            });
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => return Err(SpecifyError::RootNotFound(start.to_path_buf()).into()),
        }
    }
}

fn segment_is(path: Option<&Path>, name: &str) -> bool {
    path.and_then(Path::file_name)
        .map(|n| n == std::ffi::OsStr::new(name))
        .unwrap_or(false)
}

/// Classifies a root path by its parent and grandparent segment names.
///
/// Pure function of the path string; calling it twice on the same path
/// always yields the same classification.
#[must_use]
pub fn classify(root: &Path) -> Layout {
    let parent = root.parent();
    if segment_is(Some(root), "source") && segment_is(parent, "workspace") {
        return Layout::Source;
    }
    let grandparent = parent.and_then(Path::parent);
    if segment_is(parent, "worktree") && segment_is(grandparent, "workspace") {
        return Layout::Worktree;
    }
    Layout::Unstructured
}

/// Resolves the source and workspace directories for an already-migrated
/// root. Returns `None` for an unstructured root, which must be migrated
/// first.
#[must_use]
pub fn source_and_workspace(root: &Path, layout: Layout) -> Option<(PathBuf, PathBuf)> {
    match layout {
        Layout::Source => {
            let workspace = root.parent()?.to_path_buf();
            Some((root.to_path_buf(), workspace))
        }
        Layout::Worktree => {
            let workspace = root.parent()?.parent()?.to_path_buf();
            let source = workspace.join("source");
            Some((source, workspace))
        }
        Layout::Unstructured => None,
    }
}

fn migration_err(reason: impl Into<String>) -> SpecifyError {
    SpecifyError::Migration {
        reason: reason.into(),
    }
}

/// Relocates a plain repository into the workspace layout.
///
/// Creates `parent(root)/workspace` and its `worktree` subdirectory
/// idempotently, then moves the repository to `workspace/source`. The move is
/// destructive: the original root path no longer exists afterwards, and no
/// rollback is attempted on failure (created `workspace` directories may
/// remain).
///
/// # Errors
/// Returns [`SpecifyError::Migration`] if `workspace/source` already exists
/// with content or any directory creation or rename fails.
pub fn migrate(root: &Path) -> Result<PathBuf> {
    let parent = root
        .parent()
        .ok_or_else(|| migration_err("repository root has no parent directory"))?;

    let workspace = parent.join("workspace");
    let source = workspace.join("source");

    std::fs::create_dir_all(workspace.join("worktree"))
        .map_err(|e| migration_err(format!("creating {}: {}", workspace.display(), e)))?;
    std::fs::create_dir_all(&source)
        .map_err(|e| migration_err(format!("creating {}: {}", source.display(), e)))?;

    // rename cannot replace a directory on every platform, so drop the empty
    // placeholder first. A non-empty target fails here and aborts the run.
    std::fs::remove_dir(&source).map_err(|e| {
        migration_err(format!("cannot replace {}: {}", source.display(), e))
    })?;
    std::fs::rename(root, &source).map_err(|e| {
        migration_err(format!(
            "moving {} to {}: {}",
            root.display(),
            source.display(),
            e
        ))
    })?;

    Ok(source)
}
