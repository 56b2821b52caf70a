//! Configuration management for docsjs.
//!
//! Parses `docsjs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `docs.content_dir`
//! - `docs.routes_file`
//! - `site.base_url`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Override content directory.
    pub content_dir: Option<PathBuf>,
    /// Override cache enabled flag.
    pub cache_enabled: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docsjs.toml";

/// Default content directory, relative to the config file.
const DEFAULT_CONTENT_DIR: &str = "contents";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Site metadata.
    pub site: SiteConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    content_dir: Option<String>,
    routes_file: Option<String>,
    cache_enabled: Option<bool>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Root of the content tree (`{name}/{slug}/index.mdx`, `blogs/`).
    pub content_dir: PathBuf,
    /// TOML route file replacing the built-in route trees.
    pub routes_file: Option<PathBuf>,
    /// Whether compiled documents are cached.
    pub cache_enabled: bool,
}

/// Site metadata used for canonical URLs and page titles.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    /// Public origin of the site, used for canonical URLs.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "DocsJs".to_owned(),
            description: "Documentación en español de las tecnologías JavaScript más populares."
                .to_owned(),
            base_url: "https://www.docsjs.com".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`DOCSJS_URL`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `docsjs.toml` in the current directory and its parents, falling
    /// back to defaults relative to the current directory.
    ///
    /// CLI settings are applied after path resolution and take precedence
    /// over file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// a value is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(content_dir) = &settings.content_dir {
            self.docs_resolved.content_dir.clone_from(content_dir);
        }
        if let Some(cache_enabled) = settings.cache_enabled {
            self.docs_resolved.cache_enabled = cache_enabled;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            docs: DocsConfigRaw::default(),
            site: SiteConfig::default(),
            docs_resolved: DocsConfig {
                content_dir: base.join(DEFAULT_CONTENT_DIR),
                routes_file: None,
                cache_enabled: true,
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port cannot be 0".to_owned()));
        }
        require_non_empty(&self.site.base_url, "site.base_url")?;
        require_http_url(&self.site.base_url, "site.base_url")?;
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;

        if let Some(ref dir) = self.docs.content_dir {
            self.docs.content_dir = Some(expand::expand_env(dir, "docs.content_dir")?);
        }
        if let Some(ref file) = self.docs.routes_file {
            self.docs.routes_file = Some(expand::expand_env(file, "docs.routes_file")?);
        }

        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            content_dir: config_dir.join(
                self.docs
                    .content_dir
                    .as_deref()
                    .unwrap_or(DEFAULT_CONTENT_DIR),
            ),
            routes_file: self.docs.routes_file.as_deref().map(|f| config_dir.join(f)),
            cache_enabled: self.docs.cache_enabled.unwrap_or(true),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/sitio"));

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.docs_resolved.content_dir, PathBuf::from("/sitio/contents"));
        assert_eq!(config.docs_resolved.routes_file, None);
        assert!(config.docs_resolved.cache_enabled);
        assert_eq!(config.site.title, "DocsJs");
        assert_eq!(config.site.base_url, "https://www.docsjs.com");
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.server.port, 7979);
        assert_eq!(config.site.title, "DocsJs");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000

[docs]
content_dir = "content"
routes_file = "routes.toml"
cache_enabled = false

[site]
title = "Docs"
base_url = "https://docs.example.com"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/proyecto"));

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.docs_resolved.content_dir, PathBuf::from("/proyecto/content"));
        assert_eq!(
            config.docs_resolved.routes_file,
            Some(PathBuf::from("/proyecto/routes.toml"))
        );
        assert!(!config.docs_resolved.cache_enabled);
        assert_eq!(config.site.title, "Docs");
        assert_eq!(config.site.base_url, "https://docs.example.com");
        // Unset keys keep their defaults
        assert!(config.site.description.starts_with("Documentación"));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[docs]\ncontent_dir = \"docs-content\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.docs_resolved.content_dir, dir.path().join("docs-content"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/no/existe/docsjs.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server\nport = 1").unwrap();

        assert!(matches!(
            Config::load(Some(&path), None),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_rejects_port_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server]\nport = 0\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_validation_rejects_empty_host() {
        let mut config = Config::default_with_base(Path::new("/sitio"));
        config.server.host = String::new();

        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_non_http_base_url() {
        let mut config = Config::default_with_base(Path::new("/sitio"));
        config.site.base_url = "docsjs.com".to_owned();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_env_expansion_in_file() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("DOCSJS_TEST_CONTENT", "mdx");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[docs]\ncontent_dir = \"${DOCSJS_TEST_CONTENT}\"\n[server]\nhost = \"${DOCSJS_TEST_NO_HOST:-localhost}\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.docs_resolved.content_dir, dir.path().join("mdx"));
        assert_eq!(config.server.host, "localhost");
        unsafe {
            std::env::remove_var("DOCSJS_TEST_CONTENT");
        }
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/sitio"));
        let overrides = CliSettings {
            port: Some(3000),
            content_dir: Some(PathBuf::from("/otro/contents")),
            cache_enabled: Some(false),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1"); // Unchanged
        assert_eq!(config.docs_resolved.content_dir, PathBuf::from("/otro/contents"));
        assert!(!config.docs_resolved.cache_enabled);
    }

    #[test]
    fn test_cli_settings_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            port: Some(0),
            ..Default::default()
        };

        assert!(Config::load(Some(&path), Some(&overrides)).is_err());
    }
}
