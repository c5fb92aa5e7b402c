pub mod age;
pub mod offset;

use datecalc_core::config::{ConfigLoader, ResolvedConfig};

/// Load configuration, exiting with a message when it is unusable.
pub fn load_config() -> ResolvedConfig {
    match ConfigLoader::load(None) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    }
}
