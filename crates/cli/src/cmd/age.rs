//! Age command: prompt for a birthdate and print years and months.

use datecalc_core::date::age_today;
use tracing::debug;

use crate::logging;
use crate::prompt::prompt_date;

/// Run the age calculator.
pub fn run() {
    let birth = match prompt_date() {
        Ok(date) => date,
        Err(e) => {
            eprintln!("{e}");
            logging::flush();
            std::process::exit(1);
        }
    };

    let age = age_today(birth);
    debug!(%birth, years = age.years, months = age.months, "computed age");

    println!("{age}");
}
