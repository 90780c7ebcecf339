// error.rs

//! # Error Handling Module
//!
//! A single `AppError` enum covers every way a run can stop early. Each
//! variant maps to a process exit status through [`AppError::exit_code`]
//! so `main` can mirror the status of whichever tool aborted the run.
//!
//! # Usage Example
//! ```rust
//! use crate::error::{AppError, AppResult};
//!
//! fn guard(files: &[String]) -> AppResult<()> {
//!     if files.is_empty() {
//!         return Err(AppError::NoInfraChanges { base: "main".to_string() });
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Represents errors that may occur within the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// No `.tf` or `.yml` file differs from the base branch.
    #[error("no terraform changes found compared to {base}")]
    NoInfraChanges { base: String },

    /// An external tool exited with a non-zero status.
    #[error("`{program} {args}` failed{}: {stderr}", exit_suffix(.code))]
    CommandFailed {
        program: String,
        args: String,
        code: Option<i32>,
        stderr: String,
    },

    /// A required tool is not on `PATH`.
    #[error("the `{0}` binary was not found in PATH")]
    BinaryNotFound(String),

    /// The repository has no remote to compare against or push to.
    #[error("no git remote is configured")]
    NoRemote,

    /// The planner output has no summary line.
    #[error("terraform output contains no plan summary; nothing to review")]
    NoPlanSummary,

    /// The confirmation prompt could not be read.
    #[error("prompt error: {0}")]
    Prompt(#[from] rustyline::error::ReadlineError),

    #[error("failed to parse JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Exit status the process should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed { code: Some(c), .. } if *c != 0 => *c,
            Self::BinaryNotFound(_) => 127,
            _ => 1,
        }
    }
}

fn exit_suffix(code: &Option<i32>) -> String {
    code.map(|c| format!(" with exit code {c}"))
        .unwrap_or_default()
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_propagates_tool_status() {
        let err = AppError::CommandFailed {
            program: "terraform".to_string(),
            args: "plan".to_string(),
            code: Some(3),
            stderr: "boom".to_string(),
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.to_string(),
            "`terraform plan` failed with exit code 3: boom"
        );
    }

    #[test]
    fn killed_command_exits_with_one() {
        let err = AppError::CommandFailed {
            program: "git".to_string(),
            args: "push".to_string(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn guard_failure_exits_with_one() {
        let err = AppError::NoInfraChanges {
            base: "main".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "no terraform changes found compared to main");
    }

    #[test]
    fn missing_binary_uses_shell_status() {
        assert_eq!(AppError::BinaryNotFound("gh".to_string()).exit_code(), 127);
    }
}
