// commands/mod.rs

pub mod common_args;
pub mod plan_pr;
