// utils/terraform.rs

//! # Terraform Utility Module
//!
//! `TerraformCli` implements [`Planner`] by running
//! `terraform -chdir=<dir> plan -lock=false -refresh=true -no-color`.
//! State locking is disabled because the plan is read-only review output.

use std::path::Path;

use crate::app::TERRAFORM_BINARY;
use crate::error::AppResult;
use crate::services::Planner;
use crate::utils::process::run;

/// `Planner` backed by the `terraform` CLI.
pub struct TerraformCli {
    binary: String,
}

impl TerraformCli {
    pub fn new() -> Self {
        Self {
            binary: TERRAFORM_BINARY.to_string(),
        }
    }
}

impl Default for TerraformCli {
    fn default() -> Self {
        Self::new()
    }
}

/// Arguments for a plan of `dir`.
pub fn plan_args(dir: &Path) -> Vec<String> {
    vec![
        format!("-chdir={}", dir.display()),
        "plan".to_string(),
        "-lock=false".to_string(),
        "-refresh=true".to_string(),
        "-no-color".to_string(),
    ]
}

impl Planner for TerraformCli {
    fn plan(&self, dir: &Path) -> AppResult<String> {
        let args = plan_args(dir);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        Ok(run(&self.binary, &args)?.combined())
    }
}
