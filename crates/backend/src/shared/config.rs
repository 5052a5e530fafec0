use contracts::shared::dock::DEFAULT_FREE_TAB_LIMIT;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dock: DockConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built frontend, served as fallback.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DockConfig {
    /// Tabs shown when no API key is entered.
    #[serde(default = "default_free_tab_limit")]
    pub free_tab_limit: usize,
    /// Forwarded to the dock and enables gating diagnostics in the log.
    #[serde(default)]
    pub debug_mode: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8640
}

fn default_static_dir() -> String {
    "dist".to_string()
}

fn default_free_tab_limit() -> usize {
    DEFAULT_FREE_TAB_LIMIT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            free_tab_limit: default_free_tab_limit(),
            debug_mode: false,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("invalid server address {}:{}: {e}", self.host, self.port))?;
        Ok(addr)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 8640
static_dir = "dist"

[dock]
free_tab_limit = 3
debug_mode = true
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 8640);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.dock.free_tab_limit, 3);
        assert!(config.dock.debug_mode);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.dock.free_tab_limit, DEFAULT_FREE_TAB_LIMIT);
        assert!(!config.dock.debug_mode);
    }

    #[test]
    fn test_socket_addr() {
        let config = Config::default();
        let addr = config.server.socket_addr().unwrap();
        assert_eq!(addr.port(), 8640);

        let bad = ServerConfig {
            host: "not a host".into(),
            ..ServerConfig::default()
        };
        assert!(bad.socket_addr().is_err());
    }
}
