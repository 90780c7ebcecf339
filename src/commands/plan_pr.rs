// commands/plan_pr.rs

//! # Plan Pull Request Command
//!
//! Runs `terraform plan` for one environment of the current branch, renders
//! the result as a collapsible Markdown report and, unless `--show` is
//! given, opens a pull request with that report as its body.
//!
//! ## Flow
//! 1. Resolve the current branch and the remote it tracks.
//! 2. Stop with exit status 1 unless a `.tf` or `.yml` file differs from
//!    `<remote>/<base>`.
//! 3. Plan `<TF_ROOT>/<environment>` and extract the summary and actions.
//! 4. Print the report. In show-only mode, stop here.
//! 5. Ask for confirmation, push the branch if the host cannot compare it
//!    yet, then create the pull request.
//!
//! ## Example Usage
//! ```bash
//! ./tfplan-pr --environment staging --show
//! ./tfplan-pr -e production -t "Bump instance sizes"
//! ```

use clap::{ArgMatches, Command};
use log::{debug, info};

use crate::app::{
    APP_DESCRIPTION, APP_NAME, APP_VERSION, DEFAULT_ENV_FILE, GH_BINARY, GIT_BINARY,
    TERRAFORM_BINARY,
};
use crate::commands::common_args::{
    env_file, environment, log_level, options_from_matches, show, title, yes, RunOptions,
};
use crate::core::changes::relevant_changes;
use crate::core::env::Settings;
use crate::core::plan::PlanExtractor;
use crate::core::report::{render_report, write_report};
use crate::error::{AppError, AppResult};
use crate::services::{CodeHost, Confirmation, Planner, PullRequest, VersionControl};
use crate::utils::binary::require_binaries;
use crate::utils::display::print_unicode_box;
use crate::utils::git::{choose_remote, GitCli};
use crate::utils::github::GhCli;
use crate::utils::prompt::TerminalPrompt;
use crate::utils::terraform::TerraformCli;
use crate::{print_info, print_success, print_warning};

/// Configures the root command for the CLI application.
pub fn command() -> Command {
    Command::new(APP_NAME)
        .version(APP_VERSION)
        .about(APP_DESCRIPTION)
        .arg(environment())
        .arg(show())
        .arg(yes())
        .arg(title())
        .arg(env_file())
        .arg(log_level())
}

/// The external collaborators of a run.
pub struct Services<'a> {
    pub vcs: &'a dyn VersionControl,
    pub host: &'a dyn CodeHost,
    pub planner: &'a dyn Planner,
    pub confirmation: &'a dyn Confirmation,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Report printed in show-only mode.
    Shown,
    /// The operator declined the prompt; nothing was pushed or created.
    Declined,
    /// Pull request opened. `pushed` is set when the branch had to be pushed first.
    Created { url: String, pushed: bool },
}

/// Executes the command with the real `git`, `gh` and `terraform` binaries.
pub fn execute(matches: &ArgMatches) -> AppResult<Outcome> {
    let options = options_from_matches(matches);
    let env_file = matches
        .get_one::<String>("env-file")
        .map(String::as_str)
        .unwrap_or(DEFAULT_ENV_FILE);
    let settings = Settings::resolve(env_file);

    let mut binaries = vec![GIT_BINARY, TERRAFORM_BINARY];
    if !options.show_only {
        binaries.push(GH_BINARY);
    }
    require_binaries(&binaries)?;

    print_unicode_box(&format!(
        "🔮 Terraform plan for environment: [{}]",
        options.environment
    ));

    let git = GitCli::new();
    let gh = GhCli::new();
    let terraform = TerraformCli::new();
    let services = Services {
        vcs: &git,
        host: &gh,
        planner: &terraform,
        confirmation: &TerminalPrompt,
    };

    let outcome = run(&settings, &options, &services, &PlanExtractor::default())?;
    if let Outcome::Created { url, .. } = &outcome {
        print_success!("Pull request created: {}", url);
    }
    Ok(outcome)
}

/// Remote for `branch`: its upstream, else the sole or first push remote.
fn resolve_remote(vcs: &dyn VersionControl, branch: &str) -> AppResult<String> {
    let upstream = vcs.upstream_remote(branch)?;
    if upstream.is_some() {
        return choose_remote(upstream, &[], "");
    }
    let remotes = vcs.remotes()?;
    let listing = if remotes.len() == 1 {
        String::new()
    } else {
        vcs.remote_listing()?
    };
    choose_remote(None, &remotes, &listing)
}

/// Runs a plan review against explicit settings and collaborators.
pub fn run(
    settings: &Settings,
    options: &RunOptions,
    services: &Services,
    extractor: &PlanExtractor,
) -> AppResult<Outcome> {
    let base = &settings.base_branch;

    let branch = services.vcs.current_branch()?;
    let remote = resolve_remote(services.vcs, &branch)?;
    debug!("Branch: {}, remote: {}, base: {}", branch, remote, base);

    print_info!("Comparing {} against {}/{}", branch, remote, base);
    let changed = services.vcs.changed_files(&remote, base)?;
    let relevant = relevant_changes(&changed);
    if relevant.is_empty() {
        return Err(AppError::NoInfraChanges { base: base.clone() });
    }
    for path in &relevant {
        debug!("  changed: {}", path);
    }

    let dir = settings.environment_dir(&options.environment);
    print_info!("Running terraform plan in {}", dir.display());
    let output = services.planner.plan(&dir)?;

    let summary = extractor
        .summary(&output)
        .ok_or(AppError::NoPlanSummary)?;
    if let Some(counts) = summary.counts {
        info!(
            "Planned changes: +{} ~{} -{}",
            counts.add, counts.change, counts.destroy
        );
    }
    let actions = extractor.actions(&output);

    let report = render_report(&summary.line, &actions);
    let report_file = write_report(&report)?;
    debug!("Report written to {}", report_file.path().display());
    print!("{}", report);

    if options.show_only {
        return Ok(Outcome::Shown);
    }

    let confirmed = options.assume_yes
        || services.confirmation.confirm(&format!(
            "Open a pull request from {} into {}?",
            branch, base
        ))?;
    if !confirmed {
        print_warning!("Aborted; no pull request created.");
        return Ok(Outcome::Declined);
    }

    let repository = match &settings.repository {
        Some(repository) => repository.clone(),
        None => services.host.default_repository()?,
    };

    let title = match &options.title {
        Some(title) => title.clone(),
        None => services.vcs.head_subject()?,
    };

    let pushed = if services.host.is_comparable(&repository, base, &branch)? {
        false
    } else {
        print_info!("Pushing {} to {}", branch, remote);
        services.vcs.push(&remote, &branch)?;
        true
    };

    let request = PullRequest {
        repository,
        base: base.clone(),
        head: branch,
        title,
        body_file: report_file.path().to_path_buf(),
    };
    let url = services.host.create_pull_request(&request)?;

    Ok(Outcome::Created { url, pushed })
}
