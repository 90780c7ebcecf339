// utils/process.rs

//! # Process Utility Module
//!
//! Blocking wrappers around `std::process::Command` for the external tools
//! this binary drives. Every invocation is logged at debug level, stdin is
//! detached so a tool can never wait on the terminal, and a non-zero exit
//! is turned into [`AppError::CommandFailed`] carrying the tool's stderr.

use std::process::{Command, Output, Stdio};

use log::debug;

use crate::error::{AppError, AppResult};

/// Captured output of a finished command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Stdout followed by stderr.
    pub fn combined(&self) -> String {
        let mut combined = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&self.stderr);
        }
        combined
    }

    /// Stdout with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.stdout.trim()
    }
}

fn execute(program: &str, args: &[&str]) -> AppResult<Output> {
    debug!("Running: {} {}", program, args.join(" "));
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()?;
    debug!("{} exited with {}", program, output.status);
    Ok(output)
}

/// Runs a command to completion; a non-zero exit is an error.
pub fn run(program: &str, args: &[&str]) -> AppResult<CommandOutput> {
    let output = execute(program, args)?;
    let captured = CommandOutput::from_output(&output);

    if !output.status.success() {
        return Err(AppError::CommandFailed {
            program: program.to_string(),
            args: args.join(" "),
            code: output.status.code(),
            stderr: captured.stderr.trim().to_string(),
        });
    }

    Ok(captured)
}

/// Runs a command whose non-zero exit is an answer rather than a failure.
///
/// Returns `None` when the command exits unsuccessfully. Failing to spawn
/// the program at all is still an error.
pub fn run_optional(program: &str, args: &[&str]) -> AppResult<Option<CommandOutput>> {
    let output = execute(program, args)?;
    if output.status.success() {
        Ok(Some(CommandOutput::from_output(&output)))
    } else {
        debug!(
            "{} {} returned non-zero: {}",
            program,
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
        Ok(None)
    }
}

/// True when the command exits successfully.
pub fn probe(program: &str, args: &[&str]) -> AppResult<bool> {
    Ok(run_optional(program, args)?.is_some())
}
