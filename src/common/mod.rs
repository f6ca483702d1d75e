//! Common functionality.

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing::level_filters::LevelFilter;

pub mod io;

/// Commonly used command line arguments.
#[derive(Parser, Debug)]
pub struct Args {
    /// Verbosity of the program
    #[clap(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            verbose: Verbosity::new(0, 0),
        }
    }
}

/// Map the `log` level selected on the command line to a `tracing` filter.
///
/// Quieting below `error` turns logging off.
pub fn tracing_level(verbose: &Verbosity<InfoLevel>) -> LevelFilter {
    match verbose.log_level() {
        Some(level) => match level {
            log::Level::Error => LevelFilter::ERROR,
            log::Level::Warn => LevelFilter::WARN,
            log::Level::Info => LevelFilter::INFO,
            log::Level::Debug => LevelFilter::DEBUG,
            log::Level::Trace => LevelFilter::TRACE,
        },
        None => LevelFilter::OFF,
    }
}

/// The version of `kb-importer` package.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod test {
    use clap_verbosity_flag::Verbosity;
    use tracing::level_filters::LevelFilter;

    #[rstest::rstest]
    #[case(0, 0, LevelFilter::INFO)]
    #[case(1, 0, LevelFilter::DEBUG)]
    #[case(2, 0, LevelFilter::TRACE)]
    #[case(0, 1, LevelFilter::WARN)]
    #[case(0, 2, LevelFilter::ERROR)]
    #[case(0, 3, LevelFilter::OFF)]
    fn tracing_level(#[case] verbose: u8, #[case] quiet: u8, #[case] expected: LevelFilter) {
        let verbosity = Verbosity::new(verbose, quiet);
        assert_eq!(super::tracing_level(&verbosity), expected);
    }

    #[test]
    fn args_default_is_info() {
        let args = super::Args::default();
        assert_eq!(super::tracing_level(&args.verbose), LevelFilter::INFO);
    }
}
