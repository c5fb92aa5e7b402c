use clap::Parser;
use datecalc::cli::AgeCli;
use datecalc::{cmd, logging};

fn main() {
    let _cli = AgeCli::parse();
    let cfg = cmd::load_config();
    logging::init(&cfg.logging);

    cmd::age::run();
    logging::flush();
}
