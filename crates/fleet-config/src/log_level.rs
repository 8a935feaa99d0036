use crate::DEFAULT_LOG_LEVEL_STRING;

use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// Wrapper for LevelFilter with lenient parsing: unknown level names fall
/// back to Info instead of failing config load.
#[derive(Debug, Clone, Copy)]
pub struct LogLevel(pub LevelFilter);

fn parse_level(s: &str) -> LogLevel {
    match s.to_lowercase().as_str() {
        "off" => LogLevel(LevelFilter::Off),
        "error" => LogLevel(LevelFilter::Error),
        "warn" => LogLevel(LevelFilter::Warn),
        "info" => LogLevel(LevelFilter::Info),
        "debug" => LogLevel(LevelFilter::Debug),
        "trace" => LogLevel(LevelFilter::Trace),
        _ => LogLevel(LevelFilter::Info),
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)
            .unwrap_or_else(|_| String::from(DEFAULT_LOG_LEVEL_STRING));

        Ok(parse_level(&s))
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_level(s))
    }
}
