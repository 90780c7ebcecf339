// core/plan.rs

//! # Plan Extraction
//!
//! Pulls the reviewable parts out of raw planner output: the block of
//! resource actions and the one-line summary. The planner's wording lives
//! only in [`PlanExtractor`], so a reworded banner is a one-place change.
//!
//! ## Example
//! ```rust
//! let extractor = PlanExtractor::default();
//! let actions = extractor.actions(&output);
//! let summary = extractor.summary(&output).ok_or(AppError::NoPlanSummary)?;
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

pub const TERRAFORM_ACTIONS_BANNER: &str = "Terraform will perform the following actions:";
pub const TERRAFORM_SUMMARY_PREFIX: &str = "Plan:";

static SUMMARY_COUNTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+) to add, (\d+) to change, (\d+) to destroy").expect("valid regex")
});

/// Resource counts from a standard summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeCounts {
    pub add: u32,
    pub change: u32,
    pub destroy: u32,
}

/// The planner's summary line, verbatim, with its parsed counts.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    pub line: String,
    pub counts: Option<ChangeCounts>,
}

impl PlanSummary {
    pub fn parse(line: &str) -> Self {
        let counts = SUMMARY_COUNTS.captures(line).and_then(|caps| {
            Some(ChangeCounts {
                add: caps[1].parse().ok()?,
                change: caps[2].parse().ok()?,
                destroy: caps[3].parse().ok()?,
            })
        });
        Self {
            line: line.to_string(),
            counts,
        }
    }
}

/// Locates the actions block and summary line in planner output.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanExtractor {
    /// A line containing this opens the actions block.
    pub banner: String,
    /// A line starting with this closes the block and is the summary.
    pub summary_prefix: String,
}

impl Default for PlanExtractor {
    fn default() -> Self {
        Self {
            banner: TERRAFORM_ACTIONS_BANNER.to_string(),
            summary_prefix: TERRAFORM_SUMMARY_PREFIX.to_string(),
        }
    }
}

impl PlanExtractor {
    /// Lines strictly between the banner and the next summary line.
    ///
    /// Both boundary lines are excluded. A later banner reopens the block.
    /// Output without a banner yields an empty string.
    pub fn actions(&self, output: &str) -> String {
        let mut inside = false;
        let mut kept = Vec::new();

        for line in output.lines() {
            if line.contains(&self.banner) {
                inside = true;
                continue;
            }
            if line.starts_with(&self.summary_prefix) {
                inside = false;
                continue;
            }
            if inside {
                kept.push(line);
            }
        }

        kept.join("\n")
    }

    /// First line starting with the summary prefix, unmodified.
    pub fn summary(&self, output: &str) -> Option<PlanSummary> {
        output
            .lines()
            .find(|line| line.starts_with(&self.summary_prefix))
            .map(PlanSummary::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN_OUTPUT: &str = "\
Refreshing state... [id=vpc-123]

Terraform used the selected providers to generate the following execution
plan. Resource actions are indicated with the following symbols:
  + create

Terraform will perform the following actions:

  # aws_s3_bucket.logs will be created
  + resource \"aws_s3_bucket\" \"logs\" {
      + bucket = \"acme-logs\"
    }

Plan: 1 to add, 0 to change, 0 to destroy.

Note: You didn't use the -out option to save this plan.
";

    #[test]
    fn test_actions_excludes_both_boundaries() {
        let actions = PlanExtractor::default().actions(PLAN_OUTPUT);
        assert_eq!(
            actions,
            "\n  # aws_s3_bucket.logs will be created\n  + resource \"aws_s3_bucket\" \"logs\" {\n      + bucket = \"acme-logs\"\n    }\n"
        );
    }

    #[test]
    fn test_actions_returns_exactly_the_enclosed_lines() {
        let body: Vec<String> = (0..5).map(|i| format!("  line {}", i)).collect();
        let output = format!(
            "preamble\n{}\n{}\nPlan: 0 to add, 5 to change, 0 to destroy.\ntrailer",
            TERRAFORM_ACTIONS_BANNER,
            body.join("\n")
        );
        let actions = PlanExtractor::default().actions(&output);
        assert_eq!(actions.lines().collect::<Vec<_>>(), body);
    }

    #[test]
    fn test_actions_empty_without_banner() {
        let output = "No changes. Your infrastructure matches the configuration.\n";
        assert_eq!(PlanExtractor::default().actions(output), "");
    }

    #[test]
    fn test_summary_is_returned_unmodified() {
        let summary = PlanExtractor::default().summary(PLAN_OUTPUT).unwrap();
        assert_eq!(summary.line, "Plan: 1 to add, 0 to change, 0 to destroy.");
        assert_eq!(
            summary.counts,
            Some(ChangeCounts {
                add: 1,
                change: 0,
                destroy: 0
            })
        );
    }

    #[test]
    fn test_summary_missing() {
        assert!(PlanExtractor::default().summary("No changes.\n").is_none());
    }

    #[test]
    fn test_summary_must_start_the_line() {
        let output = "  Plan: indented\nnote about Plan: inline\n";
        assert!(PlanExtractor::default().summary(output).is_none());
    }

    #[test]
    fn test_summary_counts_with_import_and_unknown_shapes() {
        let summary = PlanSummary::parse("Plan: 2 to import, 1 to add, 0 to change, 0 to destroy.");
        assert_eq!(summary.counts.map(|c| c.add), Some(1));

        let odd = PlanSummary::parse("Plan: something else");
        assert_eq!(odd.counts, None);
        assert_eq!(odd.line, "Plan: something else");
    }

    #[test]
    fn test_custom_wording() {
        let extractor = PlanExtractor {
            banner: "OpenTofu will perform the following actions:".to_string(),
            summary_prefix: "Plan:".to_string(),
        };
        let output = "OpenTofu will perform the following actions:\n  ~ update\nPlan: 0 to add, 1 to change, 0 to destroy.\n";
        assert_eq!(extractor.actions(output), "  ~ update");
    }
}
