//! Configuration loading from TOML files

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use pubstats_core::HttpConfig;
use pubstats_sync::{ReconcileConfig, RemovalCeilings};

/// Process configuration, built once and passed down by reference
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub articlemeta: ArticleMetaConfig,
    pub index: IndexConfig,
    pub http: HttpSettings,
    pub reconcile: ReconcileSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArticleMetaConfig {
    #[serde(deserialize_with = "deserialize_env_var")]
    pub base_url: String,
}

impl Default for ArticleMetaConfig {
    fn default() -> Self {
        Self {
            base_url: pubstats_articlemeta::DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Elasticsearch base URL
    #[serde(deserialize_with = "deserialize_env_var")]
    pub url: String,
    /// Index name prefix; namespaces become `{name}-{namespace}`
    #[serde(deserialize_with = "deserialize_env_var")]
    pub name: String,
    pub scroll_size: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("ELASTICSEARCH_HOST")
                .unwrap_or_else(|_| "http://127.0.0.1:9200".to_string()),
            name: std::env::var("ELASTICSEARCH_INDEX").unwrap_or_else(|_| "publication".to_string()),
            scroll_size: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds
    pub timeout: u64,
    pub connect_timeout: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        let defaults = HttpConfig::default();
        Self {
            timeout: defaults.timeout.as_secs(),
            connect_timeout: defaults.connect_timeout.as_secs(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ReconcileSettings {
    pub workers: usize,
    pub chunk_size: usize,
    pub ceilings: CeilingSettings,
}

impl Default for ReconcileSettings {
    fn default() -> Self {
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        Self {
            workers: cpus.min(8),
            chunk_size: ReconcileConfig::default().chunk_size,
            ceilings: CeilingSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CeilingSettings {
    pub journal: usize,
    pub article: usize,
    pub citation: usize,
}

impl Default for CeilingSettings {
    fn default() -> Self {
        let c = RemovalCeilings::default();
        Self {
            journal: c.journal,
            article: c.article,
            citation: c.citation,
        }
    }
}

/// Deserialize a string that may be a `${VAR}` environment reference
fn deserialize_env_var<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    expand_env_var(&s).ok_or_else(|| {
        serde::de::Error::custom(format!("environment variable in '{s}' is not set"))
    })
}

/// Expand `${VAR}` to the variable's value; other strings pass through
fn expand_env_var(s: &str) -> Option<String> {
    if let Some(var_name) = s.strip_prefix("${").and_then(|s| s.strip_suffix('}')) {
        std::env::var(var_name).ok()
    } else {
        Some(s.to_string())
    }
}

impl Config {
    /// Load configuration
    ///
    /// Search order:
    /// 1. `explicit` (`--config`), which must exist
    /// 2. ./pubstats.toml (current directory)
    /// 3. the user config directory (`~/.config/pubstats/config.toml`)
    ///
    /// If no config file found, returns default config.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local_config = PathBuf::from("pubstats.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "pubstats") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout: Duration::from_secs(self.http.timeout),
            connect_timeout: Duration::from_secs(self.http.connect_timeout),
        }
    }

    /// Reconciler settings, with an optional worker count override
    pub fn reconcile_config(&self, workers: Option<usize>) -> ReconcileConfig {
        let r = &self.reconcile;
        ReconcileConfig {
            ceilings: RemovalCeilings {
                journal: r.ceilings.journal,
                article: r.ceilings.article,
                citation: r.ceilings.citation,
            },
            workers: workers.unwrap_or(r.workers).max(1),
            chunk_size: r.chunk_size.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.articlemeta.base_url, pubstats_articlemeta::DEFAULT_BASE_URL);
        assert_eq!(config.index.scroll_size, 1000);
        assert_eq!(config.http.timeout, 60);
        assert_eq!(config.reconcile.ceilings.journal, 20);
        assert!(config.reconcile.workers >= 1);
    }

    #[test]
    fn expand_env_var_simple() {
        std::env::set_var("PUBSTATS_TEST_VAR", "test_value");
        assert_eq!(
            expand_env_var("${PUBSTATS_TEST_VAR}"),
            Some("test_value".to_string())
        );
        std::env::remove_var("PUBSTATS_TEST_VAR");
    }

    #[test]
    fn expand_env_var_literal() {
        assert_eq!(expand_env_var("literal"), Some("literal".to_string()));
    }

    #[test]
    fn expand_env_var_missing() {
        assert_eq!(expand_env_var("${NONEXISTENT_VAR_12345}"), None);
    }

    #[test]
    fn parse_config_toml() {
        let toml = r#"
[index]
url = "http://es.local:9200"
name = "stats"

[http]
timeout = 10

[reconcile]
workers = 2

[reconcile.ceilings]
article = 500
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.index.url, "http://es.local:9200");
        assert_eq!(config.index.name, "stats");
        assert_eq!(config.http.timeout, 10);
        assert_eq!(config.http.connect_timeout, 30);

        let reconcile = config.reconcile_config(None);
        assert_eq!(reconcile.workers, 2);
        assert_eq!(reconcile.ceilings.article, 500);
        assert_eq!(reconcile.ceilings.journal, 20);
        assert_eq!(config.reconcile_config(Some(6)).workers, 6);
    }

    #[test]
    fn missing_env_reference_is_an_error() {
        let toml = r#"
[index]
url = "${NONEXISTENT_VAR_67890}"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[articlemeta]\nbase_url = \"http://localhost:8000/api/v1\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.articlemeta.base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.http_config().timeout, Duration::from_secs(60));
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
