//! Configuration loading and typed config structures for Cropfeed.
//!
//! The configuration lives in `cropfeed-config.yaml` in the working
//! directory. Every field has a default, so a missing file or a partial
//! file is valid. Environment variables override the file for the values
//! most often changed per deployment.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default configuration file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "cropfeed-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held an unusable value.
    #[error("invalid environment override {name}: {message}")]
    Env {
        /// The environment variable name.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
///
/// Mirrors the structure of `cropfeed-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Data source locations.
    #[serde(default)]
    pub data: DataSection,
}

impl FeedConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `CROPFEED_HOST` overrides `server.host`
    /// - `CROPFEED_PORT` overrides `server.port`
    /// - `CROPFEED_DATASET` overrides `data.dataset_path`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Env`] if an override cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply env overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Env`] if an override cannot be parsed.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Load from [`CONFIG_FILE`] if it exists, otherwise use defaults.
    ///
    /// Env overrides apply in both cases.
    ///
    /// # Errors
    ///
    /// Same as [`from_file`](Self::from_file).
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            return Self::from_file(path);
        }
        tracing::info!("Config file not found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("CROPFEED_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CROPFEED_PORT") {
            self.server.port = port.parse().map_err(|e| ConfigError::Env {
                name: "CROPFEED_PORT",
                message: format!("{e}"),
            })?;
        }
        if let Some(path) = lookup("CROPFEED_DATASET") {
            self.data.dataset_path = PathBuf::from(path);
        }
        Ok(())
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Address to bind (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Data source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataSection {
    /// Path to the recorded dataset served by `/daily_conditions`.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Documents rotated by `/daily_conditions_progress`, in order.
    #[serde(default = "default_progress_sources")]
    pub progress_sources: Vec<PathBuf>,
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            progress_sources: default_progress_sources(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("test_data.json")
}

fn default_progress_sources() -> Vec<PathBuf> {
    ["exdata/1.json", "exdata/2.json", "exdata/3.json"]
        .into_iter()
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn parse_without_env(yaml: &str) -> FeedConfig {
        let mut config: FeedConfig = serde_yml::from_str(yaml).unwrap();
        config.apply_env_overrides(no_env).unwrap();
        config
    }

    #[test]
    fn default_config_matches_recorded_layout() {
        let config = FeedConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.data.dataset_path, PathBuf::from("test_data.json"));
        assert_eq!(
            config.data.progress_sources,
            vec![
                PathBuf::from("exdata/1.json"),
                PathBuf::from("exdata/2.json"),
                PathBuf::from("exdata/3.json"),
            ]
        );
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9000
data:
  dataset_path: "fixtures/corn.json"
  progress_sources:
    - "stages/a.json"
    - "stages/b.json"
"#;
        let config = parse_without_env(yaml);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.data.dataset_path, PathBuf::from("fixtures/corn.json"));
        assert_eq!(config.data.progress_sources.len(), 2);
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config = parse_without_env("server:\n  port: 3000\n");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.data, DataSection::default());
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let env: BTreeMap<&str, &str> = [
            ("CROPFEED_HOST", "10.0.0.5"),
            ("CROPFEED_PORT", "8181"),
            ("CROPFEED_DATASET", "/data/rice.json"),
        ]
        .into_iter()
        .collect();

        let mut config = FeedConfig::default();
        config
            .apply_env_overrides(|name| env.get(name).map(|v| (*v).to_owned()))
            .unwrap();

        assert_eq!(config.server.host, "10.0.0.5");
        assert_eq!(config.server.port, 8181);
        assert_eq!(config.data.dataset_path, PathBuf::from("/data/rice.json"));
    }

    #[test]
    fn invalid_port_override_is_rejected() {
        let mut config = FeedConfig::default();
        let err = config
            .apply_env_overrides(|name| (name == "CROPFEED_PORT").then(|| "eighty".to_owned()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { name: "CROPFEED_PORT", .. }));
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        assert!(matches!(
            FeedConfig::parse("server: ["),
            Err(ConfigError::Yaml { .. })
        ));
    }

    /// Per-test scratch directory, removed when the test finishes.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(name: &str) -> Self {
            let unique = format!(
                "cropfeed_config_{name}_{}_{:?}",
                std::process::id(),
                std::thread::current().id(),
            );
            let dir = std::env::temp_dir().join(unique);
            std::fs::create_dir_all(&dir).ok();
            Self(dir)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            std::fs::remove_dir_all(&self.0).ok();
        }
    }

    #[test]
    fn from_file_reads_yaml() {
        let dir = ScratchDir::new("from_file");
        let path = dir.0.join(CONFIG_FILE);
        std::fs::write(
            &path,
            "data:\n  progress_sources:\n    - \"stages/only.json\"\n",
        )
        .unwrap();

        let config = FeedConfig::from_file(&path).unwrap();
        assert_eq!(
            config.data.progress_sources,
            vec![PathBuf::from("stages/only.json")]
        );
    }

    #[test]
    fn from_file_missing_path_is_io_error() {
        let dir = ScratchDir::new("missing");
        let err = FeedConfig::from_file(&dir.0.join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_or_default_without_file_uses_defaults() {
        // Tests run from the crate directory, which carries no config file.
        assert!(!Path::new(CONFIG_FILE).exists());

        let config = FeedConfig::load_or_default().unwrap();
        assert_eq!(config.data.progress_sources, default_progress_sources());
    }
}
