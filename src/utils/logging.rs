// utils/logging.rs

use log::LevelFilter;

/// Maps a `--log-level` value onto a filter, falling back to `Info`.
pub fn level_filter(log_level: &str) -> LevelFilter {
    match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Sets the logger level based on the provided argument.
pub fn initialize_logger(log_level: &str) {
    env_logger::Builder::new()
        .filter(None, level_filter(log_level))
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_is_case_insensitive() {
        assert_eq!(level_filter("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_filter("warn"), LevelFilter::Warn);
        assert_eq!(level_filter("bogus"), LevelFilter::Info);
    }
}
