use std::fmt;
use std::io::{self, BufRead as _, IsTerminal as _, Write as _};

use anyhow::Result;
use dialoguer::theme::Theme;
use dialoguer::Input;

pub(crate) const PROMPT: &str = "¿Desea continuar? (s/n)";
pub(crate) const AFFIRMATIVE: &str = "s";

/// Renders input prompts as `prompt ` with no colon, the same text the piped
/// path prints.
struct PlainTheme;

impl Theme for PlainTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{prompt} ")
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{prompt} {sel}")
    }
}

/// Asks for confirmation and reports whether the answer was the affirmative
/// token. Piped input is read as a single plain line.
pub(crate) fn confirm() -> Result<bool> {
    let answer = if io::stdin().is_terminal() {
        Input::<String>::with_theme(&PlainTheme)
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()?
    } else {
        print!("{PROMPT} ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        line
    };
    Ok(is_affirmative(&answer))
}

pub(crate) fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase() == AFFIRMATIVE
}
