//! Application configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable naming the map description file.
pub const MAP_PATH_VAR: &str = "TUBE_MAP_PATH";

/// Environment variable naming the address to serve on.
pub const ADDR_VAR: &str = "TUBE_ROUTER_ADDR";

const DEFAULT_MAP_PATH: &str = "data/london.json";
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Error returned when configuration values are malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The listen address does not parse
    #[error("invalid {var} value {value:?}: expected an address like 127.0.0.1:3000")]
    InvalidAddr { var: &'static str, value: String },
}

/// Configuration for loading the map and serving queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path to the JSON map description.
    pub map_path: PathBuf,

    /// Address the HTTP server listens on.
    pub addr: SocketAddr,

    /// Station search results returned when the request gives no limit.
    pub station_search_limit: usize,

    /// Upper bound on station search results.
    pub station_search_max: usize,
}

impl AppConfig {
    /// Read configuration from the process environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(MAP_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.map_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(ADDR_VAR).filter(|v| !v.trim().is_empty()) {
            config.addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr {
                    var: ADDR_VAR,
                    value,
                })?;
        }

        Ok(config)
    }

    /// Override the map path.
    pub fn with_map_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.map_path = path.into();
        self
    }

    /// Override the listen address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Clamp a requested station search limit to the configured bounds.
    pub fn station_search_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.station_search_limit)
            .min(self.station_search_max)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            addr: SocketAddr::from(DEFAULT_ADDR),
            station_search_limit: 10,
            station_search_max: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn default_config() {
        let config = AppConfig::default();

        assert_eq!(config.map_path, PathBuf::from("data/london.json"));
        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.station_search_limit, 10);
        assert_eq!(config.station_search_max, 50);
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn environment_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (MAP_PATH_VAR, "/srv/maps/london.json"),
            (ADDR_VAR, "0.0.0.0:8080"),
        ]))
        .unwrap();

        assert_eq!(config.map_path, PathBuf::from("/srv/maps/london.json"));
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn blank_values_ignored() {
        let config =
            AppConfig::from_lookup(lookup(&[(MAP_PATH_VAR, "  "), (ADDR_VAR, "")])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn invalid_addr_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: "localhost".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid TUBE_ROUTER_ADDR value \"localhost\": expected an address like 127.0.0.1:3000"
        );
    }

    #[test]
    fn builder_overrides() {
        let addr: SocketAddr = "10.0.0.1:9000".parse().unwrap();
        let config = AppConfig::default()
            .with_map_path("maps/test.json")
            .with_addr(addr);

        assert_eq!(config.map_path, PathBuf::from("maps/test.json"));
        assert_eq!(config.addr, addr);
    }

    #[test]
    fn search_limit_clamped() {
        let config = AppConfig::default();

        assert_eq!(config.station_search_limit(None), 10);
        assert_eq!(config.station_search_limit(Some(3)), 3);
        assert_eq!(config.station_search_limit(Some(500)), 50);
    }
}
