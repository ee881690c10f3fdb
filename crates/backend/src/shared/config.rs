use contracts::dashboards::d402_seller_performance::PolicySelection;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Фильтр по умолчанию, RUST_LOG имеет приоритет
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            dir: default_log_dir(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "target/logs".to_string()
}

/// Policies used when a request carries no `options`
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AnalysisConfig {
    pub revenue_policy: Option<String>,
    pub bonus_policy: Option<String>,
}

impl AnalysisConfig {
    pub fn policy_selection(&self) -> PolicySelection {
        PolicySelection {
            calculate_revenue: self.revenue_policy.clone(),
            calculate_bonus: self.bonus_policy.clone(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[logging]
filter = "info"
dir = "target/logs"

[analysis]
revenue_policy = "simple"
bonus_policy = "by_profit"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Runs before the tracing subscriber exists, so the chosen source is
/// returned alongside the config for the caller to log.
pub fn load_config() -> anyhow::Result<(Config, String)> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                let config = parse_config(&contents)?;
                return Ok((config, config_path.display().to_string()));
            }
        }
    }

    let config = parse_config(DEFAULT_CONFIG)?;
    Ok((config, "embedded defaults".to_string()))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port).parse()?;
        Ok(addr)
    }

    /// Resolves the log directory relative to the executable directory
    pub fn log_dir(&self) -> PathBuf {
        let dir = Path::new(&self.logging.dir);
        if dir.is_absolute() {
            return dir.to_path_buf();
        }

        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                return exe_dir.join(dir);
            }
        }

        dir.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.analysis.revenue_policy.as_deref(), Some("simple"));
        assert_eq!(config.analysis.bonus_policy.as_deref(), Some("by_profit"));
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_optional_sections_default() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.dir, "target/logs");
        assert!(config.analysis.policy_selection().is_empty());
    }

    #[test]
    fn test_missing_server_section_is_an_error() {
        assert!(parse_config("[logging]\nfilter = \"debug\"\n").is_err());
    }
}
