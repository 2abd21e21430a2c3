//! Result reporting for the provisioning pass.
//!
//! Two output modes share one record: human-readable `KEY: value` lines, or a
//! single JSON line for scripting. The shell integration emitted by
//! `specify init` consumes the JSON form to export `SPECIFY_FEATURE` and
//! change directory in the caller's session; the binary itself never relies
//! on in-process environment mutation surviving past exit.

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Everything a provisioning run produces
#[derive(Debug, Serialize)]
pub struct Report {
    pub branch_name: String,
    pub spec_file: PathBuf,
    pub feature_num: String,
    pub worktree_path: PathBuf,
    pub has_git: bool,
}

impl Report {
    /// Prints the report to stdout, as a single JSON line when `json` is set
    /// and as one line per field otherwise.
    ///
    /// # Errors
    /// Returns an error if the record cannot be serialized (e.g. a path that
    /// is not valid UTF-8).
    pub fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string(self)?);
        } else {
            println!("BRANCH_NAME: {}", self.branch_name);
            println!("SPEC_FILE: {}", self.spec_file.display());
            println!("FEATURE_NUM: {}", self.feature_num);
            println!("WORKTREE_PATH: {}", self.worktree_path.display());
            println!("HAS_GIT: {}", self.has_git);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn json_record_is_a_single_line_with_all_fields() {
        let report = Report {
            branch_name: "001-add-oauth2-login".to_string(),
            spec_file: PathBuf::from("/w/worktree/001-add-oauth2-login/specs/001-add-oauth2-login/spec.md"),
            feature_num: "001".to_string(),
            worktree_path: PathBuf::from("/w/worktree/001-add-oauth2-login"),
            has_git: true,
        };

        let line = serde_json::to_string(&report).unwrap();
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["branch_name"], "001-add-oauth2-login");
        assert_eq!(value["feature_num"], "001");
        assert_eq!(value["has_git"], true);
        assert!(value["spec_file"].as_str().unwrap().ends_with("spec.md"));
        assert!(value["worktree_path"].as_str().is_some());
    }
}
