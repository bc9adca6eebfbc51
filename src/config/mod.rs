use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::CodesError;

pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DOWNLOAD_ROUTE: &str = "/api/download";

/// Application configuration and constants
#[derive(Debug, Clone)]
pub struct Config {
    /// Candidate locations of the codes directory, probed in order
    pub roots: Vec<PathBuf>,
    pub host: String,
    pub port: u16,
    /// Public route that search results link to
    pub download_route: String,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            roots: default_roots(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            download_route: DEFAULT_DOWNLOAD_ROUTE.to_string(),
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(roots: Vec<PathBuf>, port: Option<u16>, host: Option<String>) -> Self {
        Self {
            roots,
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port.unwrap_or(DEFAULT_PORT),
            download_route: DEFAULT_DOWNLOAD_ROUTE.to_string(),
        }
    }

    /// Defaults overlaid with `CODES_ROOTS`, `CODES_HOST` and `CODES_PORT`
    pub fn from_env() -> Result<Self, CodesError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, CodesError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(roots) = lookup("CODES_ROOTS") {
            let roots: Vec<PathBuf> = env::split_paths(&roots)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            if roots.is_empty() {
                return Err(CodesError::Config("CODES_ROOTS names no directories".to_string()));
            }
            config.roots = roots;
        }

        if let Some(host) = lookup("CODES_HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("CODES_PORT") {
            config.port = port
                .parse()
                .map_err(|e| CodesError::Config(format!("invalid CODES_PORT {:?}: {}", port, e)))?;
        }

        Ok(config)
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> Result<SocketAddr, CodesError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| CodesError::Config(format!("invalid listen address {}:{}: {}", self.host, self.port, e)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Working directory first, then locations relative to the executable,
/// then the build checkout path of the hosted deployment.
fn default_roots() -> Vec<PathBuf> {
    let mut roots = Vec::with_capacity(4);
    if let Ok(cwd) = env::current_dir() {
        roots.push(cwd.join("codes"));
    }
    if let Some(exe_dir) = env::current_exe().ok().and_then(|p| p.parent().map(PathBuf::from)) {
        roots.push(exe_dir.join("..").join("..").join("codes"));
        roots.push(exe_dir.join("..").join("..").join("..").join("codes"));
    }
    roots.push(PathBuf::from("/opt/build/repo/codes"));
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_end_with_deployment_path() {
        let config = Config::new();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.download_route, "/api/download");
        assert_eq!(config.roots.last(), Some(&PathBuf::from("/opt/build/repo/codes")));
        assert!(config.roots[0].ends_with("codes"));
    }

    #[test]
    fn env_overrides_roots_and_port() {
        let joined = env::join_paths(["/srv/a", "/srv/b"]).unwrap();
        let joined = joined.to_string_lossy().to_string();
        let config = Config::from_lookup(lookup_from(&[
            ("CODES_ROOTS", joined.as_str()),
            ("CODES_PORT", "9000"),
            ("CODES_HOST", "127.0.0.1"),
        ]))
        .unwrap();
        assert_eq!(config.roots, vec![PathBuf::from("/srv/a"), PathBuf::from("/srv/b")]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn bad_port_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("CODES_PORT", "not-a-port")])).unwrap_err();
        assert!(matches!(err, CodesError::Config(_)));
    }

    #[test]
    fn empty_roots_rejected() {
        let err = Config::from_lookup(lookup_from(&[("CODES_ROOTS", "")])).unwrap_err();
        assert!(matches!(err, CodesError::Config(_)));
    }
}
