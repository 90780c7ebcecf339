// utils/display.rs

//! # Display Utility Module
//!
//! Terminal rendering helpers: a Unicode banner box for run headers and
//! color-coded status macros for info, success, warning and error lines.
//! Styling comes from the `colored` crate, which also honours `NO_COLOR`.
//!
//! ## Example Usage
//! ```rust
//! use crate::utils::display::print_unicode_box;
//!
//! print_unicode_box("🔮 Planning production...");
//! print_info!("Comparing against origin/main");
//! print_warning!("No terraform changes found");
//! ```

use unicode_width::UnicodeWidthStr;

/// Builds the lines of a box drawn around `message`, sized by display
/// width so emojis and wide characters line up.
pub fn unicode_box_lines(message: &str) -> Vec<String> {
    let lines: Vec<&str> = message.split('\n').collect();
    let max_length = lines
        .iter()
        .map(|line| UnicodeWidthStr::width(*line))
        .max()
        .unwrap_or(0);

    let mut rendered = Vec::with_capacity(lines.len() + 2);
    rendered.push(format!("┌{}┐", "─".repeat(max_length + 2)));
    for line in lines {
        let padding = max_length - UnicodeWidthStr::width(line);
        rendered.push(format!("│ {}{} │", line, " ".repeat(padding)));
    }
    rendered.push(format!("└{}┘", "─".repeat(max_length + 2)));
    rendered
}

/// Prints a yellow Unicode-styled message box.
pub fn print_unicode_box(message: &str) {
    use colored::Colorize;

    for line in unicode_box_lines(message) {
        println!("{}", line.bright_yellow());
    }
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{}", format!($($arg)*).blue())
    }};
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{}", format!($($arg)*).yellow())
    }};
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{}", format!($($arg)*).red())
    }};
}

#[macro_export]
macro_rules! print_success {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{}", format!($($arg)*).green())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_pads_to_widest_line() {
        let lines = unicode_box_lines("ab\nabcd");
        assert_eq!(lines[0], "┌──────┐");
        assert_eq!(lines[1], "│ ab   │");
        assert_eq!(lines[2], "│ abcd │");
        assert_eq!(lines[3], "└──────┘");
    }

    #[test]
    fn test_box_counts_wide_characters() {
        let lines = unicode_box_lines("🔮");
        // the emoji occupies two columns
        assert_eq!(lines[0], "┌────┐");
        assert_eq!(lines[1], "│ 🔮 │");
    }
}
