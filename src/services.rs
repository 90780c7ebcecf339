// services.rs

//! # Service Interfaces
//!
//! The narrow seams between the orchestration in `commands::plan_pr` and
//! the outside world. Production implementations shell out to `git`, `gh`
//! and `terraform`; tests substitute recording fakes.

use std::path::{Path, PathBuf};

use crate::error::AppResult;

/// Read and push operations on the local git repository.
pub trait VersionControl {
    fn current_branch(&self) -> AppResult<String>;
    /// Remote configured as the branch's upstream, if any.
    fn upstream_remote(&self, branch: &str) -> AppResult<Option<String>>;
    fn remotes(&self) -> AppResult<Vec<String>>;
    /// Verbose remote listing (`git remote -v`).
    fn remote_listing(&self) -> AppResult<String>;
    /// Paths differing between `HEAD` and `<remote>/<base>`.
    fn changed_files(&self, remote: &str, base: &str) -> AppResult<Vec<String>>;
    fn head_subject(&self) -> AppResult<String>;
    fn push(&self, remote: &str, branch: &str) -> AppResult<()>;
}

/// A pull request about to be opened.
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequest {
    pub repository: String,
    pub base: String,
    pub head: String,
    pub title: String,
    pub body_file: PathBuf,
}

/// Git hosting operations.
pub trait CodeHost {
    /// Repository identifier (`owner/name`) of the working directory.
    fn default_repository(&self) -> AppResult<String>;
    /// Whether the host can already compare `head` against `base`,
    /// which only holds once `head` has been pushed.
    fn is_comparable(&self, repository: &str, base: &str, head: &str) -> AppResult<bool>;
    /// Opens the pull request and returns its URL.
    fn create_pull_request(&self, request: &PullRequest) -> AppResult<String>;
}

/// Produces the textual plan for a configuration directory.
pub trait Planner {
    fn plan(&self, dir: &Path) -> AppResult<String>;
}

/// Yes/no question to the operator.
pub trait Confirmation {
    fn confirm(&self, question: &str) -> AppResult<bool>;
}
