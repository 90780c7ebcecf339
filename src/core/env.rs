// core/env.rs

//! # Environment Settings
//!
//! Resolves the run's settings once, from the process environment layered
//! over an optional dotenv file, so the orchestration never reads globals.
//!
//! | Variable      | Default                          |
//! |---------------|----------------------------------|
//! | `BASE_BRANCH` | `main`                           |
//! | `TF_ROOT`     | `terraform`                      |
//! | `GH_REPO`     | `gh repo view` of the checkout   |

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use crate::app::{
    DEFAULT_BASE_BRANCH, DEFAULT_TF_ROOT, ENV_BASE_BRANCH, ENV_REPOSITORY, ENV_TF_ROOT,
};

/// Settings that come from the environment rather than the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Branch the pull request merges into.
    pub base_branch: String,
    /// Directory holding one terraform configuration per environment.
    pub infra_root: PathBuf,
    /// `owner/name`; resolved through the hosting CLI when unset.
    pub repository: Option<String>,
}

impl Settings {
    /// Builds settings from a variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_empty(lookup(key));

        Self {
            base_branch: get(ENV_BASE_BRANCH).unwrap_or_else(|| DEFAULT_BASE_BRANCH.to_string()),
            infra_root: PathBuf::from(
                get(ENV_TF_ROOT).unwrap_or_else(|| DEFAULT_TF_ROOT.to_string()),
            ),
            repository: get(ENV_REPOSITORY),
        }
    }

    /// Loads `env_file` (if present) and lets the process environment
    /// override it.
    pub fn resolve(env_file: &str) -> Self {
        Self::resolve_with(env_file, |key| env::var(key).ok())
    }

    /// Like [`Settings::resolve`] with an explicit process-environment
    /// lookup. An empty value in the environment falls through to the file.
    pub fn resolve_with<F>(env_file: &str, process_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_vars = load_env_file(env_file);
        let settings = Self::from_lookup(|key| {
            non_empty(process_env(key)).or_else(|| non_empty(file_vars.get(key).cloned()))
        });
        debug!("Resolved settings: {:?}", settings);
        settings
    }

    /// Terraform configuration directory for `environment`.
    pub fn environment_dir(&self, environment: &str) -> PathBuf {
        self.infra_root.join(environment)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Reads KEY=VALUE pairs from a dotenv file. A missing or unreadable file
/// yields an empty map.
pub fn load_env_file(env_file: &str) -> HashMap<String, String> {
    let mut env_vars = HashMap::new();

    let dotenv_path = Path::new(env_file);
    if !dotenv_path.exists() {
        debug!("No .env file found at: {}", env_file);
        return env_vars;
    }

    debug!("Loading environment variables from: {}", env_file);
    match dotenvy::from_path_iter(dotenv_path) {
        Ok(iter) => {
            for (key, value) in iter.flatten() {
                debug!("  Loaded env var: {}", key);
                env_vars.insert(key, value);
            }
        }
        Err(e) => {
            debug!("Warning: could not load .env file: {}", e);
        }
    }

    env_vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_apply_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[]));
        assert_eq!(settings.base_branch, "main");
        assert_eq!(settings.infra_root, PathBuf::from("terraform"));
        assert_eq!(settings.repository, None);
    }

    #[test]
    fn test_values_override_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("BASE_BRANCH", "develop"),
            ("TF_ROOT", "infra/envs"),
            ("GH_REPO", "acme/infra"),
        ]));
        assert_eq!(settings.base_branch, "develop");
        assert_eq!(
            settings.environment_dir("staging"),
            PathBuf::from("infra/envs").join("staging")
        );
        assert_eq!(settings.repository.as_deref(), Some("acme/infra"));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let settings = Settings::from_lookup(lookup_from(&[("BASE_BRANCH", ""), ("GH_REPO", " ")]));
        assert_eq!(settings.base_branch, "main");
        assert_eq!(settings.repository, None);
    }

    #[test]
    fn test_load_env_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "BASE_BRANCH=release").unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "TF_ROOT=\"stacks\"").unwrap();

        let vars = load_env_file(file.path().to_str().unwrap());
        assert_eq!(vars.get("BASE_BRANCH").map(String::as_str), Some("release"));
        assert_eq!(vars.get("TF_ROOT").map(String::as_str), Some("stacks"));
    }

    fn env_file_with(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_process_env_beats_env_file() {
        let file = env_file_with(&["BASE_BRANCH=develop", "GH_REPO=acme/from-file"]);
        let settings = Settings::resolve_with(
            file.path().to_str().unwrap(),
            lookup_from(&[("BASE_BRANCH", "release")]),
        );
        assert_eq!(settings.base_branch, "release");
        assert_eq!(settings.repository.as_deref(), Some("acme/from-file"));
    }

    #[test]
    fn test_env_file_beats_default() {
        let file = env_file_with(&["TF_ROOT=stacks"]);
        let settings = Settings::resolve_with(file.path().to_str().unwrap(), lookup_from(&[]));
        assert_eq!(settings.infra_root, PathBuf::from("stacks"));
        assert_eq!(settings.base_branch, "main");
    }

    #[test]
    fn test_empty_process_value_falls_through_to_env_file() {
        let file = env_file_with(&["BASE_BRANCH=develop"]);
        let settings = Settings::resolve_with(
            file.path().to_str().unwrap(),
            lookup_from(&[("BASE_BRANCH", "")]),
        );
        assert_eq!(settings.base_branch, "develop");
    }

    #[test]
    fn test_missing_env_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.env");
        assert!(load_env_file(missing.to_str().unwrap()).is_empty());
    }
}
