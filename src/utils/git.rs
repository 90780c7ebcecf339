// utils/git.rs

//! # Git Utility Module
//!
//! `GitCli` implements [`VersionControl`] over the `git` binary, and
//! [`choose_remote`] picks the remote a branch is compared against.

use log::debug;

use crate::app::GIT_BINARY;
use crate::error::{AppError, AppResult};
use crate::services::VersionControl;
use crate::utils::process::{run, run_optional};

/// `VersionControl` backed by the `git` CLI in the current directory.
pub struct GitCli {
    binary: String,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            binary: GIT_BINARY.to_string(),
        }
    }

    fn git(&self, args: &[&str]) -> AppResult<String> {
        Ok(run(&self.binary, args)?.text().to_string())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    fn current_branch(&self) -> AppResult<String> {
        self.git(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn upstream_remote(&self, branch: &str) -> AppResult<Option<String>> {
        let key = format!("branch.{}.remote", branch);
        let remote = run_optional(&self.binary, &["config", "--get", &key])?
            .and_then(|output| upstream_from_config(output.text()));
        Ok(remote)
    }

    fn remotes(&self) -> AppResult<Vec<String>> {
        Ok(non_empty_lines(&self.git(&["remote"])?))
    }

    fn remote_listing(&self) -> AppResult<String> {
        self.git(&["remote", "-v"])
    }

    fn changed_files(&self, remote: &str, base: &str) -> AppResult<Vec<String>> {
        let target = format!("{}/{}", remote, base);
        Ok(non_empty_lines(
            &self.git(&["diff", "--name-only", "HEAD", &target])?,
        ))
    }

    fn head_subject(&self) -> AppResult<String> {
        self.git(&["log", "-1", "--pretty=%s"])
    }

    fn push(&self, remote: &str, branch: &str) -> AppResult<()> {
        let output = run(&self.binary, &["push", "--set-upstream", remote, branch])?;
        debug!("git push: {}", output.combined().trim());
        Ok(())
    }
}

fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Remote named by a `branch.<name>.remote` value. `.` marks a local
/// upstream branch, which has no remote.
pub fn upstream_from_config(value: &str) -> Option<String> {
    match value.trim() {
        "" | "." => None,
        remote => Some(remote.to_string()),
    }
}

/// Name of the first remote whose `git remote -v` entry is a push URL.
pub fn first_push_remote(listing: &str) -> Option<String> {
    listing
        .lines()
        .filter(|line| line.trim_end().ends_with("(push)"))
        .find_map(|line| line.split_whitespace().next())
        .map(str::to_string)
}

/// Picks the remote to compare against and push to.
///
/// The branch's upstream wins; otherwise a sole configured remote is used;
/// otherwise the first push entry of the verbose listing.
pub fn choose_remote(
    upstream: Option<String>,
    remotes: &[String],
    listing: &str,
) -> AppResult<String> {
    if let Some(remote) = upstream {
        return Ok(remote);
    }
    if let [only] = remotes {
        return Ok(only.clone());
    }
    first_push_remote(listing).ok_or(AppError::NoRemote)
}
