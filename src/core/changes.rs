// core/changes.rs

//! Infrastructure change detection between a branch and its base.

use crate::app::INFRA_FILE_SUFFIXES;

/// Paths that count as infrastructure changes (`*.tf`, `*.yml`).
pub fn relevant_changes(files: &[String]) -> Vec<String> {
    files
        .iter()
        .filter(|path| {
            INFRA_FILE_SUFFIXES
                .iter()
                .any(|suffix| path.ends_with(suffix))
        })
        .cloned()
        .collect()
}
