// utils/mod.rs

//! # Utilities Module
//!
//! Terminal output, logging and the process-level adapters for `git`,
//! `gh` and `terraform`.

pub mod binary;
pub mod display;
pub mod git;
pub mod github;
pub mod logging;
pub mod process;
pub mod prompt;
pub mod terraform;
