// main.rs

//! # tfplan-pr - Main Entry Point
//!
//! Opens a pull request whose body is the `terraform plan` of the current
//! branch. It checks that infrastructure files changed relative to the base
//! branch, plans one environment, renders the output as a collapsible
//! Markdown report and, after confirmation, pushes the branch and creates
//! the pull request through the GitHub CLI.
//!
//! ## Arguments
//!
//! - `--environment`, `-e` - Environment directory under `TF_ROOT` (default: `production`).
//! - `--show`, `-s` - Print the report only; no push, no pull request.
//! - `--yes`, `-y` - Skip the confirmation prompt.
//! - `--title`, `-t` - Pull request title (default: HEAD commit subject).
//! - `--env-file` - Dotenv file with `BASE_BRANCH`, `TF_ROOT`, `GH_REPO` (default: `.env`).
//! - `--log-level` - The logging level (default: `info`).
//!
//! ## Example Usage
//! ```bash
//! ./tfplan-pr --show
//! BASE_BRANCH=develop ./tfplan-pr -e staging
//! ```
//!
//! ## Exit Codes
//! `0` on success, help, or a declined prompt; `1` when no terraform files
//! changed; otherwise the status of the external command that failed.

mod app;
mod commands;
mod core;
mod error;
mod services;
mod utils;

use std::process;

use log::debug;

use crate::app::DEFAULT_LOG_LEVEL;
use crate::error::AppError;
use crate::utils::logging::initialize_logger;

/// Main function that initializes the CLI and runs the plan review.
fn main() {
    let matches = commands::plan_pr::command().get_matches();

    // ====================
    // Initialize Logger
    // ====================
    let log_level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or(DEFAULT_LOG_LEVEL);
    initialize_logger(log_level);

    debug!("Logger initialized with level: {}", log_level);

    // ====================
    // Command Execution
    // ====================
    match commands::plan_pr::execute(&matches) {
        Ok(outcome) => debug!("Finished: {:?}", outcome),
        Err(e @ AppError::NoInfraChanges { .. }) => {
            print_warning!("{}", e);
            process::exit(e.exit_code());
        }
        Err(e) => {
            print_error!("{}", e);
            process::exit(e.exit_code());
        }
    }
}
