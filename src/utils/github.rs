// utils/github.rs

//! # GitHub Utility Module
//!
//! `GhCli` implements [`CodeHost`] on top of the GitHub CLI. Authentication
//! and host selection are left to `gh` itself.

use serde::Deserialize;

use crate::app::GH_BINARY;
use crate::error::AppResult;
use crate::services::{CodeHost, PullRequest};
use crate::utils::process::{probe, run};

/// Subset of `gh repo view --json nameWithOwner`.
#[derive(Debug, Deserialize)]
struct RepoView {
    #[serde(rename = "nameWithOwner")]
    name_with_owner: String,
}

/// `CodeHost` backed by the `gh` CLI.
pub struct GhCli {
    binary: String,
}

impl GhCli {
    pub fn new() -> Self {
        Self {
            binary: GH_BINARY.to_string(),
        }
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the JSON printed by `gh repo view --json nameWithOwner`.
fn parse_repo_view(json: &str) -> AppResult<String> {
    let view: RepoView = serde_json::from_str(json)?;
    Ok(view.name_with_owner)
}

/// Last non-empty line of `gh pr create` output, which is the PR URL.
fn pull_request_url(stdout: &str) -> String {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

impl CodeHost for GhCli {
    fn default_repository(&self) -> AppResult<String> {
        let output = run(&self.binary, &["repo", "view", "--json", "nameWithOwner"])?;
        parse_repo_view(output.text())
    }

    fn is_comparable(&self, repository: &str, base: &str, head: &str) -> AppResult<bool> {
        let endpoint = format!("repos/{}/compare/{}...{}", repository, base, head);
        probe(&self.binary, &["api", &endpoint, "--silent"])
    }

    fn create_pull_request(&self, request: &PullRequest) -> AppResult<String> {
        let body_file = request.body_file.to_string_lossy();
        let output = run(
            &self.binary,
            &[
                "pr",
                "create",
                "--repo",
                &request.repository,
                "--base",
                &request.base,
                "--head",
                &request.head,
                "--title",
                &request.title,
                "--body-file",
                &body_file,
            ],
        )?;
        Ok(pull_request_url(&output.stdout))
    }
}
