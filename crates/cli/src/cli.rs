use clap::Parser;
use datecalc_core::date::{Offset, OffsetUnit};

/// Print your age in whole years and months.
#[derive(Debug, Parser)]
#[command(
    name = "age-calculator",
    version,
    about = "Print your age in whole years and months",
    long_about = "Prompts for a date of birth (YYYY-MM-DD) and prints how many whole \
                  years and months have passed since then."
)]
pub struct AgeCli {}

/// Compute a date N days ahead (or behind) from a base date.
#[derive(Debug, Parser)]
#[command(
    name = "days-ahead",
    version,
    about = "Compute a date N days ahead (or behind) from a base date",
    after_help = "Examples:\n  days-ahead 2025-09-10 30\n  days-ahead today 7\n  days-ahead today -5 --format '%A, %B %d'"
)]
pub struct DaysAheadCli {
    /// Base date in YYYY-MM-DD, or "today"/"now"
    pub base: String,

    /// Number of days to add (negative to subtract)
    #[arg(allow_negative_numbers = true)]
    pub days: i64,

    /// Output strftime format [default: %Y-%m-%d, or output.format from config]
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Compute a date N weeks ahead (or behind) from a base date.
#[derive(Debug, Parser)]
#[command(
    name = "weeks-ahead",
    version,
    about = "Compute a date N weeks ahead (or behind) from a base date",
    after_help = "Examples:\n  weeks-ahead 2025-09-10 12\n  weeks-ahead today 3\n  weeks-ahead now -2 -f '%d/%m/%Y'"
)]
pub struct WeeksAheadCli {
    /// Base date in YYYY-MM-DD, or "today"/"now"
    pub base: String,

    /// Number of weeks to add (negative to subtract)
    #[arg(allow_negative_numbers = true)]
    pub weeks: i64,

    /// Output strftime format [default: %Y-%m-%d, or output.format from config]
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Unit-independent request shared by the two offset tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetArgs {
    pub base: String,
    pub offset: Offset,
    pub format: Option<String>,
}

impl OffsetArgs {
    pub fn unit(&self) -> OffsetUnit {
        self.offset.unit
    }
}

impl From<DaysAheadCli> for OffsetArgs {
    fn from(cli: DaysAheadCli) -> Self {
        Self { base: cli.base, offset: Offset::days(cli.days), format: cli.format }
    }
}

impl From<WeeksAheadCli> for OffsetArgs {
    fn from(cli: WeeksAheadCli) -> Self {
        Self { base: cli.base, offset: Offset::weeks(cli.weeks), format: cli.format }
    }
}
