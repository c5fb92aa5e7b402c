//! Shared plumbing for the `age-calculator`, `days-ahead` and `weeks-ahead`
//! binaries.

pub mod cli;
pub mod cmd;
pub mod logging;
pub mod prompt;
