use clap::Parser;
use datecalc::cli::WeeksAheadCli;
use datecalc::{cmd, logging};

fn main() {
    let cli = WeeksAheadCli::parse();
    let cfg = cmd::load_config();
    logging::init(&cfg.logging);

    cmd::offset::run(cli.into(), &cfg);
    logging::flush();
}
