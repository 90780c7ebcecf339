// utils/binary.rs

//! # Binary Utility Module
//!
//! Locates the external tools (`git`, `gh`, `terraform`) on `PATH` so a
//! run can fail up front instead of halfway through.
//!
//! ## Example Usage
//! ```rust
//! use crate::utils::binary::{get_binary_path, require_binaries};
//!
//! require_binaries(&["git", "terraform"])?;
//! if let Some(path) = get_binary_path("gh") {
//!     println!("Found gh at: {:?}", path);
//! }
//! ```

use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{AppError, AppResult};

fn binary_file_name(name: &str) -> String {
    if cfg!(target_os = "windows") && !name.ends_with(".exe") {
        format!("{}.exe", name)
    } else {
        name.to_string()
    }
}

/// Searches the directories of a `PATH`-style value for `name`.
pub fn find_in_paths(name: &str, paths: &std::ffi::OsStr) -> Option<PathBuf> {
    let file_name = binary_file_name(name);
    env::split_paths(paths)
        .map(|dir| dir.join(&file_name))
        .find(|candidate| candidate.is_file())
}

/// Get the full path to a binary on `PATH`.
pub fn get_binary_path(name: &str) -> Option<PathBuf> {
    if Path::new(name).components().count() > 1 {
        let explicit = PathBuf::from(name);
        return explicit.is_file().then_some(explicit);
    }
    let paths = env::var_os("PATH")?;
    find_in_paths(name, &paths)
}

/// Fails with [`AppError::BinaryNotFound`] for the first missing binary.
pub fn require_binaries(names: &[&str]) -> AppResult<()> {
    for name in names {
        match get_binary_path(name) {
            Some(path) => debug!("Using {} at {}", name, path.display()),
            None => return Err(AppError::BinaryNotFound(name.to_string())),
        }
    }
    Ok(())
}
