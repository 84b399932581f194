use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ShelfConfig {
    pub server: ServerConfig,
    pub corpus: CorpusConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub transport: String,
    pub log_level: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorpusConfig {
    pub root: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".into(),
            log_level: "info".into(),
            host: "127.0.0.1".into(),
            port: 8931,
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        let root = default_shelf_dir()
            .join("corpus")
            .to_string_lossy()
            .into_owned();
        Self { root }
    }
}

/// Returns `~/.shelf/`, or `./.shelf/` when no home directory is known.
pub fn default_shelf_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".shelf")
}

/// Returns the default config file path: `~/.shelf/config.toml`
pub fn default_config_path() -> PathBuf {
    default_shelf_dir().join("config.toml")
}

impl ShelfConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            ShelfConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (SHELF_ROOT, SHELF_TRANSPORT, SHELF_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SHELF_ROOT") {
            self.corpus.root = val;
        }
        if let Ok(val) = std::env::var("SHELF_TRANSPORT") {
            self.server.transport = val;
        }
        if let Ok(val) = std::env::var("SHELF_LOG_LEVEL") {
            self.server.log_level = val;
        }
    }

    /// Resolve the corpus root, expanding `~` if needed.
    pub fn resolved_root(&self) -> PathBuf {
        expand_tilde(&self.corpus.root)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ShelfConfig::default();
        assert_eq!(config.server.transport, "stdio");
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.server.port, 8931);
        assert!(config.corpus.root.ends_with("corpus"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[server]
log_level = "debug"
transport = "http"

[corpus]
root = "/srv/shelf"
"#;
        let config: ShelfConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.log_level, "debug");
        assert_eq!(config.server.transport, "http");
        assert_eq!(config.corpus.root, "/srv/shelf");
        // defaults still apply for unset fields
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8931);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = ShelfConfig::load_from(tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = ShelfConfig::default();
        std::env::set_var("SHELF_ROOT", "/tmp/override");
        std::env::set_var("SHELF_TRANSPORT", "http");
        std::env::set_var("SHELF_LOG_LEVEL", "trace");

        config.apply_env_overrides();

        assert_eq!(config.corpus.root, "/tmp/override");
        assert_eq!(config.server.transport, "http");
        assert_eq!(config.server.log_level, "trace");

        // Clean up
        std::env::remove_var("SHELF_ROOT");
        std::env::remove_var("SHELF_TRANSPORT");
        std::env::remove_var("SHELF_LOG_LEVEL");
    }

    #[test]
    fn expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde("/srv/shelf"), PathBuf::from("/srv/shelf"));
    }
}
