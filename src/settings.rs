use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "airdata-client.toml";

/// Transport settings for [`create_client_with`](crate::client::create_client_with),
/// stored as TOML.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL override. Falls back to the built-in default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Headers attached to every request.
    pub headers: BTreeMap<String, String>,
}

impl ClientSettings {
    /// Settings file location inside the per-user config directory.
    pub fn default_path() -> Result<PathBuf> {
        match ProjectDirs::from("dev", "bund", "airdata-client") {
            Some(dirs) => Ok(dirs.config_dir().join(SETTINGS_FILE_NAME)),
            None => bail!("Could not determine configuration directory"),
        }
    }

    /// Load settings from the default path, or defaults if there is no file.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let s = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let settings: Self = toml::from_str(&s)
            .with_context(|| format!("Failed to parse settings TOML: {}", path.display()))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty TOML, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let toml = toml::to_string_pretty(self).context("Failed to serialize settings to TOML")?;
        fs::write(path, toml)
            .with_context(|| format!("Failed to write settings file: {}", path.display()))?;
        log::debug!("Saved settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_settings() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("nested").join(SETTINGS_FILE_NAME);

        let mut s = ClientSettings::default();
        s.base_url = Some("https://example.test/api".into());
        s.timeout_secs = Some(10);
        s.headers.insert("accept".into(), "application/json".into());

        s.save_to(&path)?;
        let loaded = ClientSettings::load_from(&path)?;
        assert_eq!(s, loaded);
        Ok(())
    }

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let tmp = tempdir()?;
        let loaded = ClientSettings::load_from(&tmp.path().join(SETTINGS_FILE_NAME))?;
        assert_eq!(loaded, ClientSettings::default());
        assert!(loaded.base_url.is_none());
        Ok(())
    }

    #[test]
    fn test_default_path_file_name() -> Result<()> {
        let path = ClientSettings::default_path()?;
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(SETTINGS_FILE_NAME));
        Ok(())
    }
}
