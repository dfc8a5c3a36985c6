//! Application configuration, loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use crate::errors::{ErrorKind, Result, ResultExt};
use crate::lol_api::{Region, DEFAULT_DDRAGON_VERSION};

/// File the api key is read from when `RIOT_API_KEY` is unset.
pub const KEY_FILE : &str = "./key.txt";

pub const DEFAULT_PORT : u16 = 8000;

/// Read once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Riot api key sent with every upstream query.
    pub api_key : String,
    /// Address the http server binds to.
    pub address : IpAddr,
    pub port : u16,
    /// Platform region players are looked up on.
    pub region : Region,
    /// Data Dragon patch the spell, rune and item tables are pinned to.
    pub ddragon_version : String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Environment variables:
    /// - `RIOT_API_KEY` - riot api key (falls back to the contents of `key.txt`)
    /// - `BIND_ADDRESS` - address to listen on (default: `0.0.0.0`)
    /// - `PORT` - http server port (default: 8000)
    /// - `LOL_REGION` - platform region, e.g. `na1`, `euw1`, `kr` (default: `na1`)
    /// - `DDRAGON_VERSION` - static data patch (default: `12.22.1`)
    pub fn load() -> Result<Config> {
        Self::from_lookup(|name| std::env::var(name).ok(), Path::new(KEY_FILE))
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(var : F, key_file : &Path) -> Result<Config>
    where F : Fn(&str) -> Option<String> {

        let api_key = match var("RIOT_API_KEY").map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
            Some(key) => key,
            None => read_key_file(key_file)?,
        };

        let address = match var("BIND_ADDRESS") {
            Some(v) => v.parse().map_err(|_| ErrorKind::InvalidSetting("BIND_ADDRESS", v))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match var("PORT") {
            Some(v) => v.parse().map_err(|_| ErrorKind::InvalidSetting("PORT", v))?,
            None => DEFAULT_PORT,
        };

        let region = match var("LOL_REGION") {
            Some(v) => v.parse().map_err(|_| ErrorKind::InvalidSetting("LOL_REGION", v))?,
            None => Region::Na1,
        };

        let ddragon_version = var("DDRAGON_VERSION")
            .unwrap_or_else(|| DEFAULT_DDRAGON_VERSION.to_string());

        Ok(Config {
            api_key,
            address,
            port,
            region,
            ddragon_version,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

/// Loads the api key from the key file, trimming surrounding whitespace.
fn read_key_file(path : &Path) -> Result<String> {
    if !path.exists() {
        return Err(ErrorKind::MissingApiKey.into());
    }
    let key = std::fs::read_to_string(path)
        .chain_err(|| format!("Can't read api key file {}", path.display()))?
        .trim().to_string();
    if key.is_empty() {
        return Err(ErrorKind::MissingApiKey.into());
    }
    Ok(key)
}
