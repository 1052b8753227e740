//! Process configuration, read from the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PORT` | `8080` | TCP port to listen on. |
//! | `HOST` | `0.0.0.0` | Interface address to bind. |
//!
//! Empty values are treated as unset.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::Error;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { host: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: DEFAULT_PORT }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key → value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(port) = read(&lookup, "PORT")? {
            config.port = port;
        }
        if let Some(host) = read(&lookup, "HOST")? {
            config.host = host;
        }
        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn read<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else { return Ok(None) };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|e: T::Err| Error::Config {
        key,
        value: raw.clone(),
        reason: e.to_string(),
    })
}
