use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "study-tui";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Base URL of the Supabase project, e.g. "https://abc.supabase.co"
    #[serde(default)]
    pub api_url: String,
    /// Anon key used for the `apikey` and bearer headers.
    #[serde(default)]
    pub api_key: String,
    /// Table holding the records.
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_table() -> String {
    "study-record".to_string()
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_key: String::new(),
            table: default_table(),
        }
    }
}

impl StudyConfig {
    fn app_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join(APP_DIR))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("study-tui.log"))
    }

    /// Load config from disk, then apply `STUDY_*` environment overrides.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            Self::parse(&raw)
                .with_context(|| format!("Failed to parse config at {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(url) = non_empty("STUDY_API_URL") {
            self.api_url = url;
        }
        if let Some(key) = non_empty("STUDY_API_KEY") {
            self.api_key = key;
        }
        if let Some(table) = non_empty("STUDY_TABLE") {
            self.table = table;
        }
    }

    /// Fail early with a pointer to the config file when the store isn't configured.
    pub fn require_remote(&self) -> Result<()> {
        if self.api_url.trim().is_empty() || self.api_key.trim().is_empty() {
            let path = Self::config_path()?;
            anyhow::bail!(
                "No record store configured. Set `api_url` and `api_key` in {} \
                 or export STUDY_API_URL and STUDY_API_KEY.",
                path.display()
            );
        }
        Ok(())
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = StudyConfig::parse("api_url = \"https://abc.supabase.co\"").unwrap();
        assert_eq!(config.api_url, "https://abc.supabase.co");
        assert_eq!(config.api_key, "");
        assert_eq!(config.table, "study-record");
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let env: HashMap<&str, &str> = [
            ("STUDY_API_KEY", "secret"),
            ("STUDY_TABLE", "records"),
            ("STUDY_API_URL", "  "),
        ]
        .into_iter()
        .collect();
        let mut config = StudyConfig {
            api_url: "https://file.example".to_string(),
            ..StudyConfig::default()
        };

        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_url, "https://file.example");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.table, "records");
    }

    #[test]
    fn unconfigured_remote_is_rejected() {
        assert!(StudyConfig::default().require_remote().is_err());
        let config = StudyConfig {
            api_url: "https://abc.supabase.co".to_string(),
            api_key: "key".to_string(),
            ..StudyConfig::default()
        };
        assert!(config.require_remote().is_ok());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = StudyConfig {
            api_url: "https://abc.supabase.co".to_string(),
            api_key: "key".to_string(),
            table: "study-record".to_string(),
        };
        let raw = toml::to_string_pretty(&config).unwrap();
        assert_eq!(StudyConfig::parse(&raw).unwrap(), config);
    }
}
