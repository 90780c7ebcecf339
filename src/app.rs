// app.rs

//! # Application Constants
//!
//! Names, defaults and environment variable keys shared across the
//! `tfplan-pr` binary.

pub const APP_NAME: &str = "tfplan-pr";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_DESCRIPTION: &str =
    "Run terraform plan for the current branch and open a pull request with the plan as its body";

pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_ENV_FILE: &str = ".env";

pub const DEFAULT_ENVIRONMENT: &str = "production";
pub const DEFAULT_BASE_BRANCH: &str = "main";
pub const DEFAULT_TF_ROOT: &str = "terraform";

pub const ENV_BASE_BRANCH: &str = "BASE_BRANCH";
pub const ENV_TF_ROOT: &str = "TF_ROOT";
pub const ENV_REPOSITORY: &str = "GH_REPO";

pub const GIT_BINARY: &str = "git";
pub const GH_BINARY: &str = "gh";
pub const TERRAFORM_BINARY: &str = "terraform";

/// File suffixes that count as infrastructure changes.
pub const INFRA_FILE_SUFFIXES: &[&str] = &[".tf", ".yml"];

pub const REPORT_FILE_PREFIX: &str = "tfplan-pr-";
pub const REPORT_FILE_SUFFIX: &str = ".md";
