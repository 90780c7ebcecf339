// commands/common_args.rs

//! # Command Arguments
//!
//! Argument definitions for the root command and the conversion of parsed
//! matches into [`RunOptions`].

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches};

use crate::app::{DEFAULT_ENVIRONMENT, DEFAULT_ENV_FILE, DEFAULT_LOG_LEVEL, LOG_LEVELS};

/// Environment whose configuration directory is planned
pub fn environment() -> Arg {
    Arg::new("environment")
        .short('e')
        .long("environment")
        .help("Environment to plan, a directory under TF_ROOT")
        .default_value(DEFAULT_ENVIRONMENT)
        .action(ArgAction::Set)
}

/// Print the report and stop
pub fn show() -> Arg {
    Arg::new("show")
        .short('s')
        .long("show")
        .help("Only print the plan report; do not push or open a pull request")
        .action(ArgAction::SetTrue)
}

/// Skip the confirmation prompt
pub fn yes() -> Arg {
    Arg::new("yes")
        .short('y')
        .long("yes")
        .help("Open the pull request without asking for confirmation")
        .action(ArgAction::SetTrue)
}

/// Pull request title
pub fn title() -> Arg {
    Arg::new("title")
        .short('t')
        .long("title")
        .help("Pull request title [default: subject of the HEAD commit]")
        .action(ArgAction::Set)
}

/// Dotenv file consulted for BASE_BRANCH, TF_ROOT and GH_REPO
pub fn env_file() -> Arg {
    Arg::new("env-file")
        .long("env-file")
        .help("Environment variables file")
        .default_value(DEFAULT_ENV_FILE)
        .action(ArgAction::Set)
}

/// Logging verbosity
pub fn log_level() -> Arg {
    Arg::new("log-level")
        .long("log-level")
        .help("Set the logging level")
        .value_parser(PossibleValuesParser::new(LOG_LEVELS))
        .ignore_case(true)
        .default_value(DEFAULT_LOG_LEVEL)
        .action(ArgAction::Set)
}

/// Options for a single run, taken from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub environment: String,
    pub show_only: bool,
    pub assume_yes: bool,
    pub title: Option<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            show_only: false,
            assume_yes: false,
            title: None,
        }
    }
}

/// Create RunOptions from ArgMatches
pub fn options_from_matches(matches: &ArgMatches) -> RunOptions {
    RunOptions {
        environment: matches
            .get_one::<String>("environment")
            .cloned()
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        show_only: matches.get_flag("show"),
        assume_yes: matches.get_flag("yes"),
        title: matches.get_one::<String>("title").cloned(),
    }
}
