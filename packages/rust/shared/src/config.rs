//! Application configuration for MoDocs.
//!
//! User config lives at `~/.modocs/modocs.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ModocsError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "modocs.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".modocs";

// ---------------------------------------------------------------------------
// Config structs (matching modocs.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Auto-save policy.
    #[serde(default)]
    pub autosave: AutosaveConfig,

    /// PDF rendering settings.
    #[serde(default)]
    pub pdf: PdfConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Author stamped on new documents.
    #[serde(default = "default_author")]
    pub author: String,

    /// Default tone for new documents.
    #[serde(default = "default_tone")]
    pub tone: String,

    /// Path of the persisted document collection.
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// Directory exports are written to.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            tone: default_tone(),
            store_path: default_store_path(),
            export_dir: default_export_dir(),
        }
    }
}

fn default_author() -> String {
    "Current User".into()
}
fn default_tone() -> String {
    "professional".into()
}
fn default_store_path() -> String {
    "~/.modocs/documents.json".into()
}
fn default_export_dir() -> String {
    ".".into()
}

/// `[autosave]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutosaveConfig {
    /// Quiet period in milliseconds before an in-progress snapshot is saved.
    #[serde(default = "default_quiet_ms")]
    pub quiet_ms: u64,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            quiet_ms: default_quiet_ms(),
        }
    }
}

fn default_quiet_ms() -> u64 {
    1000
}

/// `[pdf]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfConfig {
    /// Remote generate-pdf endpoint. Empty string means render locally.
    #[serde(default)]
    pub endpoint: String,

    /// Headless browser binary used for local rendering.
    #[serde(default = "default_browser")]
    pub browser: String,

    /// Upper bound on content rendering.
    #[serde(default = "default_content_timeout")]
    pub content_timeout_secs: u64,

    /// Connect timeout for the remote endpoint path.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            browser: default_browser(),
            content_timeout_secs: default_content_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

fn default_browser() -> String {
    "chromium".into()
}
fn default_content_timeout() -> u64 {
    30
}
fn default_connect_timeout() -> u64 {
    10
}

impl AppConfig {
    /// The store path with a leading `~` expanded to the user's home.
    pub fn resolved_store_path(&self) -> Result<PathBuf> {
        expand_home(&self.defaults.store_path)
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| ModocsError::config("could not determine home directory"))?;
        Ok(home.join(rest))
    } else {
        Ok(PathBuf::from(path))
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.modocs/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ModocsError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.modocs/modocs.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ModocsError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| ModocsError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| ModocsError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| ModocsError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ModocsError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("store_path"));
        assert!(toml_str.contains("quiet_ms"));
        assert!(toml_str.contains("chromium"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.autosave.quiet_ms, 1000);
        assert_eq!(parsed.pdf.content_timeout_secs, 30);
        assert_eq!(parsed.defaults.author, "Current User");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[defaults]
author = "Jane Smith"

[pdf]
endpoint = "http://localhost:3100/generate-pdf"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.author, "Jane Smith");
        assert_eq!(config.defaults.tone, "professional");
        assert_eq!(config.pdf.endpoint, "http://localhost:3100/generate-pdf");
        assert_eq!(config.pdf.browser, "chromium");
    }

    #[test]
    fn expand_home_leaves_absolute_paths() {
        let p = expand_home("/tmp/docs.json").unwrap();
        assert_eq!(p, PathBuf::from("/tmp/docs.json"));

        let expanded = expand_home("~/.modocs/documents.json").unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
    }
}
