use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Result;

/// How log events are rendered on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LogConfig {
    pub level: LevelFilter,
    /// Color escape codes, only wanted when stderr is a terminal
    pub with_ansi: bool,
}

impl LogConfig {
    /// Map the number of `-v` flags to a log level, warnings by default
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        Self {
            level,
            with_ansi: std::io::stderr().is_terminal(),
        }
    }
}

/// Send log events to stderr so stdout only carries the report
pub(crate) fn init(config: LogConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(config.level)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(false),
        )
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(LogConfig::from_verbosity(0).level, LevelFilter::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level, LevelFilter::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level, LevelFilter::DEBUG);
        assert_eq!(LogConfig::from_verbosity(9).level, LevelFilter::TRACE);
    }

    #[test]
    fn ansi_follows_stderr_terminal() {
        let config = LogConfig::from_verbosity(3);
        assert_eq!(config.with_ansi, std::io::stderr().is_terminal());
    }
}
