use crate::errors::server_error::ServerError;
use std::{env, str::FromStr};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_OUTBOUND_CAPACITY: usize = 64;
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4096;

/// Server settings, read from `CHAT_*` environment variables (a `.env` file
/// is loaded first by the binary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// The stats endpoint is only served when this is set.
    pub stats_port: Option<u16>,
    pub outbound_capacity: usize,
    pub max_line_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            stats_port: None,
            outbound_capacity: DEFAULT_OUTBOUND_CAPACITY,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Config::from_lookup(|variable| env::var(variable).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ServerError> {
        let defaults = Config::default();

        let outbound_capacity = parse("CHAT_OUTBOUND_CAPACITY", lookup("CHAT_OUTBOUND_CAPACITY"))?
            .unwrap_or(defaults.outbound_capacity);
        if outbound_capacity == 0 {
            return Err(ServerError::InvalidConfig {
                variable: "CHAT_OUTBOUND_CAPACITY",
                value: outbound_capacity.to_string(),
            });
        }

        let max_line_length = parse("CHAT_MAX_LINE_LENGTH", lookup("CHAT_MAX_LINE_LENGTH"))?
            .unwrap_or(defaults.max_line_length);
        if max_line_length == 0 {
            return Err(ServerError::InvalidConfig {
                variable: "CHAT_MAX_LINE_LENGTH",
                value: max_line_length.to_string(),
            });
        }

        Ok(Config {
            host: lookup("CHAT_HOST").unwrap_or(defaults.host),
            port: parse("CHAT_PORT", lookup("CHAT_PORT"))?.unwrap_or(defaults.port),
            stats_port: parse("CHAT_STATS_PORT", lookup("CHAT_STATS_PORT"))?,
            outbound_capacity,
            max_line_length,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn stats_address(&self) -> Option<String> {
        self.stats_port.map(|port| format!("{}:{port}", self.host))
    }
}

fn parse<T: FromStr>(
    variable: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ServerError> {
    let Some(value) = value else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ServerError::InvalidConfig { variable, value })
}
