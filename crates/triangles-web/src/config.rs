//! Server configuration.

use crate::error::{Error, Result};
use std::net::SocketAddr;

const API_ADDR_VAR: &str = "TRIANGLES_API_ADDR";
const CORS_VAR: &str = "TRIANGLES_CORS_PERMISSIVE";
const DEFAULT_API_ADDR: &str = "0.0.0.0:8080";

/// Configuration for the web server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// HTTP listen address
    pub api_addr: SocketAddr,

    /// Allow cross-origin requests from any origin
    pub cors_permissive: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            api_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_permissive: true,
        }
    }
}

impl WebConfig {
    /// Read configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_addr = parse_addr(
            API_ADDR_VAR,
            &lookup(API_ADDR_VAR).unwrap_or_else(|| DEFAULT_API_ADDR.to_string()),
        )?;

        let cors_permissive = match lookup(CORS_VAR) {
            Some(value) => parse_flag(CORS_VAR, &value)?,
            None => true,
        };

        Ok(Self {
            api_addr,
            cors_permissive,
        })
    }

    /// Override the listen address from a command-line argument.
    pub fn with_addr_arg(mut self, arg: Option<&str>) -> Result<Self> {
        if let Some(addr) = arg {
            self.api_addr = parse_addr("listen address argument", addr)?;
        }
        Ok(self)
    }
}

fn parse_addr(source: &str, value: &str) -> Result<SocketAddr> {
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("invalid {source} `{value}`: {e}")))
}

fn parse_flag(source: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!("invalid {source} `{value}`: expected a boolean"))),
    }
}
