use std::io::{self, BufRead, IsTerminal as _, Write};

use anyhow::{Context, Result, anyhow};
use inquire::Text;

/// Shared helpers for interactive prompts.
#[derive(Clone, Debug)]
pub struct Wizard {
  is_tty: bool,
}

impl Wizard {
  #[must_use]
  pub fn new() -> Self {
    let stdin_tty = io::stdin().is_terminal();
    let stdout_tty = io::stdout().is_terminal();
    Self {
      is_tty: stdin_tty && stdout_tty,
    }
  }

  /// Prompt for textual input with trimming applied. Empty input yields `default`.
  ///
  /// Uses `inquire` on a TTY and a line-based fallback otherwise (tests, piped input).
  pub fn text(&self, prompt: &str, default: &str) -> Result<String> {
    if self.is_tty {
      return Text::new(prompt)
        .with_default(default)
        .prompt()
        .map(|ans| or_default(&ans, default))
        .map_err(|err| anyhow!(err));
    }
    Self::fallback_text(prompt, default)
  }

  fn fallback_text(prompt: &str, default: &str) -> Result<String> {
    anstream::print!("{prompt} (default: {default}): ");
    io::stdout().flush().ok();

    let input = read_line(&mut io::stdin().lock())?;
    // Keep the console tidy when stdin is not echoed back.
    anstream::println!();
    Ok(or_default(&input, default))
  }
}

fn or_default(input: &str, default: &str) -> String {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    default.to_string()
  } else {
    trimmed.to_string()
  }
}

/// Read one full line without its terminator. EOF yields an empty string and
/// invalid UTF-8 is an error.
fn read_line(reader: &mut impl BufRead) -> Result<String> {
  let mut line = String::new();
  reader
    .read_line(&mut line)
    .context("failed to read from stdin")?;
  let end = line.trim_end_matches(['\n', '\r']).len();
  line.truncate(end);
  Ok(line)
}
