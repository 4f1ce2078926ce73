//! T-scan CLI library
//!
//! Command-line front end of the T-scan readability analyser: resolves
//! input patterns, runs the analysis and writes the report files.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

/// Install the `env_logger` backend; `RUST_LOG` wins over `verbose`
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // a second call in the same process keeps the first logger
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}
