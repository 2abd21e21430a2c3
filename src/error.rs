use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions the provisioning pass can hit.
///
/// Every variant terminates the current invocation; nothing is retried and no
/// structured output is produced on a failure path.
#[derive(Debug, Error)]
pub enum SpecifyError {
    #[error("missing feature description\nUsage: specify [--json] <feature description>")]
    MissingDescription,

    #[error("could not determine repository root: no .git or .specify directory found searching upward from {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("repository at {} must be migrated to a workspace layout, but git is unavailable", .0.display())]
    GitRequired(PathBuf),

    #[error("failed to migrate repository into workspace layout: {reason}")]
    Migration { reason: String },

    #[error("failed to create worktree for branch '{branch}': {reason}")]
    WorktreeCreation { branch: String, reason: String },
}
