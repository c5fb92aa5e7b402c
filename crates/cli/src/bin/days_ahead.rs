use clap::Parser;
use datecalc::cli::DaysAheadCli;
use datecalc::{cmd, logging};

fn main() {
    let cli = DaysAheadCli::parse();
    let cfg = cmd::load_config();
    logging::init(&cfg.logging);

    cmd::offset::run(cli.into(), &cfg);
    logging::flush();
}
