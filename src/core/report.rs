// core/report.rs

//! # Plan Report
//!
//! Renders the pull-request body: a collapsible `<details>` block whose
//! label is the plan summary and whose body is the actions block in an
//! `hcl` code fence. The layout is byte-stable; reviewers' tooling and
//! existing PRs depend on it.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::app::{REPORT_FILE_PREFIX, REPORT_FILE_SUFFIX};
use crate::error::AppResult;

/// Renders the report for a summary line and an actions block.
pub fn render_report(summary: &str, actions: &str) -> String {
    format!(
        "<details>\n<summary>{}</summary>\n\n```hcl\n{}\n```\n\n</details>\n",
        summary, actions
    )
}

/// Writes the report to a fresh temporary file, removed on drop.
pub fn write_report(report: &str) -> AppResult<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(REPORT_FILE_PREFIX)
        .suffix(REPORT_FILE_SUFFIX)
        .tempfile()?;
    file.write_all(report.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_render_report_layout() {
        let report = render_report(
            "Plan: 1 to add, 0 to change, 0 to destroy.",
            "  + resource \"aws_s3_bucket\" \"logs\" {}",
        );
        assert_eq!(
            report,
            "<details>\n\
             <summary>Plan: 1 to add, 0 to change, 0 to destroy.</summary>\n\
             \n\
             ```hcl\n\
             \x20 + resource \"aws_s3_bucket\" \"logs\" {}\n\
             ```\n\
             \n\
             </details>\n"
        );
    }

    #[test]
    fn test_render_report_is_deterministic() {
        let first = render_report("Plan: 0 to add, 2 to change, 1 to destroy.", "  ~ a\n  - b");
        let second = render_report("Plan: 0 to add, 2 to change, 1 to destroy.", "  ~ a\n  - b");
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_write_report_round_trips_through_disk() {
        let report = render_report("Plan: 1 to add, 0 to change, 0 to destroy.", "  + x");
        let file = write_report(&report).unwrap();

        let name = file.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("tfplan-pr-"));
        assert!(name.ends_with(".md"));
        assert_eq!(fs::read_to_string(file.path()).unwrap(), report);

        let path = file.path().to_path_buf();
        drop(file);
        assert!(!path.exists());
    }
}
