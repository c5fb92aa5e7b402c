//! Optional TOML configuration for output defaults and logging.

pub mod loader;
pub mod types;

pub use loader::{CONFIG_ENV, ConfigError, ConfigLoader, default_config_path};
pub use types::{LoggingConfig, OutputConfig, ResolvedConfig};
