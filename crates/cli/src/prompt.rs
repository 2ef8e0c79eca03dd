//! Confirmation prompts for destructive and state-changing actions.

use std::io::{self, Write as _};

/// Ask `question` on stdout and read a y/N answer from stdin.
pub(crate) fn confirm(question: &str) -> io::Result<bool> {
    print!("{question} [y/N] ");

    io::stdout().flush()?;

    let mut answer = String::new();

    io::stdin().read_line(&mut answer)?;

    Ok(parse_confirmation(&answer))
}

/// Accepts `y`/`yes` and the Spanish `s`/`si`/`sí`, case-insensitively.
pub(crate) fn parse_confirmation(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_answers_are_accepted() {
        for answer in ["y", "Y", "yes", "s", "Sí", "si\n"] {
            assert!(parse_confirmation(answer), "answer: {answer:?}");
        }
    }

    #[test]
    fn anything_else_is_a_refusal() {
        for answer in ["", "n", "no", "nope", "yess", "ok"] {
            assert!(!parse_confirmation(answer), "answer: {answer:?}");
        }
    }
}
