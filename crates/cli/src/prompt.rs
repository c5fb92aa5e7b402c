//! Interactive date-of-birth prompt.
//!
//! Asks until the answer parses as a `YYYY-MM-DD` calendar date. Text that
//! is malformed and dates that do not exist (`2023-02-30`) get the same hint.
//! A terminal gets a `dialoguer` line editor; piped stdin is read line by line.

use chrono::NaiveDate;
use datecalc_core::date::parse_date;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

pub const PROMPT: &str = "Enter your DOB (YYYY-MM-DD)";
pub const HINT: &str = "Please enter a valid date in the form 1990-04-29.";

/// Error type for date prompting.
#[derive(Debug)]
pub enum PromptError {
    /// IO error during prompting.
    Io(io::Error),
    /// Input ended before a valid date was entered.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Prompt on stdin until a valid date is entered.
pub fn prompt_date() -> Result<NaiveDate, PromptError> {
    if io::stdin().is_terminal() {
        prompt_terminal()
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        prompt_lines(&mut stdin.lock(), &mut stdout.lock())
    }
}

/// Read answers from `input`, writing the prompt and hints to `out`.
///
/// Returns [`PromptError::Cancelled`] when `input` is exhausted.
pub fn prompt_lines<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<NaiveDate, PromptError> {
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::Cancelled);
        }

        match parse_date(&line) {
            Ok(date) => return Ok(date),
            Err(e) => {
                debug!("rejected answer: {e}");
                writeln!(out, "{HINT}")?;
            }
        }
    }
}

fn prompt_terminal() -> Result<NaiveDate, PromptError> {
    let theme = ColorfulTheme::default();
    loop {
        let answer = Input::<String>::with_theme(&theme)
            .with_prompt(PROMPT)
            .validate_with(|s: &String| validate_answer(s))
            .interact_text()
            .map_err(dialoguer_error_to_prompt_error)?;

        // Already validated
        if let Ok(date) = parse_date(&answer) {
            return Ok(date);
        }
    }
}

/// Inline check for the terminal prompt; the error text is the retry hint.
fn validate_answer(answer: &str) -> Result<(), &'static str> {
    match parse_date(answer) {
        Ok(_) => Ok(()),
        Err(e) => {
            debug!("rejected answer: {e}");
            Err(HINT)
        }
    }
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}
