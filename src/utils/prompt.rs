// utils/prompt.rs

//! Interactive yes/no confirmation on the terminal via `rustyline`.

use log::debug;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use crate::error::AppResult;
use crate::services::Confirmation;

/// Only a lone `y` or `Y` accepts; empty input means no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}

/// Reads the answer from the controlling terminal.
pub struct TerminalPrompt;

impl Confirmation for TerminalPrompt {
    fn confirm(&self, question: &str) -> AppResult<bool> {
        let mut editor = Editor::<()>::new()?;
        match editor.readline(&format!("{} [y/N] ", question)) {
            Ok(answer) => Ok(is_affirmative(&answer)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("Prompt closed without an answer");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_single_y_accepts() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y\n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("yy"));
    }
}
