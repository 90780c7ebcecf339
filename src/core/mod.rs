// core/mod.rs

//! # Core Module
//!
//! Pure logic of a plan review: settings, change detection, plan
//! extraction and report rendering. Nothing here spawns processes.

pub mod changes;
pub mod env;
pub mod plan;
pub mod report;
