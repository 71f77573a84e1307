//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "lap-timer")]
#[command(about = "A stopwatch and lap timer served over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Tick period in milliseconds while the stopwatch is running
    #[arg(short, long = "tick-ms", default_value = "100", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["lap-timer"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.tick_period(), Duration::from_millis(100));
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn overrides() {
        let config =
            Config::try_parse_from(["lap-timer", "-p", "8080", "--tick-ms", "50", "-v"]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.tick_period(), Duration::from_millis(50));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_zero_tick() {
        assert!(Config::try_parse_from(["lap-timer", "--tick-ms", "0"]).is_err());
    }
}
