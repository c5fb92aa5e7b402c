//! Offset commands: shift a base date by days or weeks and print it.

use chrono::NaiveDate;
use datecalc_core::config::ResolvedConfig;
use datecalc_core::date::{parse_base_date, render, shift, DateError};
use tracing::debug;

use crate::cli::OffsetArgs;
use crate::logging;

/// Message for any render failure. The user's format string is not echoed.
pub const INVALID_FORMAT_MSG: &str = "Invalid format string supplied to --format/-f.";

/// Run `days-ahead` / `weeks-ahead`.
pub fn run(args: OffsetArgs, cfg: &ResolvedConfig) {
    let today = chrono::Local::now().date_naive();

    match evaluate(&args, cfg, today) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("{}", user_message(&e));
            logging::flush();
            std::process::exit(1);
        }
    }
}

/// Resolve, shift and render; `today` stands in for the `today`/`now` keywords.
pub fn evaluate(
    args: &OffsetArgs,
    cfg: &ResolvedConfig,
    today: NaiveDate,
) -> Result<String, DateError> {
    let base = parse_base_date(&args.base)?.resolve(today);
    let result = shift(base, args.offset)?;

    debug!(
        %base,
        amount = args.offset.amount,
        unit = args.unit().noun(),
        %result,
        "shifted date"
    );

    let fmt = args.format.as_deref().unwrap_or(&cfg.output.format);
    render(result, fmt)
}

fn user_message(e: &DateError) -> String {
    match e {
        DateError::InvalidFormat => INVALID_FORMAT_MSG.to_string(),
        other => other.to_string(),
    }
}
