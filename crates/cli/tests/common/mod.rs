use assert_cmd::Command;
use std::path::Path;

/// Command for one of the binaries, isolated from any user config.
pub fn tool(name: &str, config_home: &Path) -> Command {
    let mut cmd = match name {
        "days-ahead" => Command::new(assert_cmd::cargo::cargo_bin!("days-ahead")),
        "weeks-ahead" => Command::new(assert_cmd::cargo::cargo_bin!("weeks-ahead")),
        "age-calculator" => Command::new(assert_cmd::cargo::cargo_bin!("age-calculator")),
        other => panic!("unknown binary {other}"),
    };
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("DATECALC_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
