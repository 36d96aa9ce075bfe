use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::platform;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub results: ResultsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the hit page comes from and which entries are navigable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsConfig {
    /// Path to the hits TOML file.
    /// Defaults to `$XDG_CONFIG_HOME/hitlist/hits.toml`.
    #[serde(default = "default_hits_path")]
    pub path: PathBuf,
    /// Entry class the focus controller navigates.
    #[serde(default = "default_class")]
    pub class: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Keep the focused hit vertically centered while navigating.
    #[serde(default = "default_center_scroll")]
    pub center_scroll: bool,
    /// Columns scrolled per Left/Right press on long rows.
    #[serde(default = "default_hscroll_step")]
    pub hscroll_step: u16,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            path: default_hits_path(),
            class: default_class(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            center_scroll: default_center_scroll(),
            hscroll_step: default_hscroll_step(),
        }
    }
}

fn default_hits_path() -> PathBuf {
    platform::config_dir().join("hits.toml")
}

fn default_class() -> String {
    "hit".to_string()
}

fn default_center_scroll() -> bool {
    true
}

fn default_hscroll_step() -> u16 {
    4
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.results.class, "hit");
        assert!(config.results.path.ends_with("hitlist/hits.toml"));
        assert!(config.ui.center_scroll);
        assert_eq!(config.ui.hscroll_step, 4);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [results]
            class = "result"
            "#,
        )
        .unwrap();
        assert_eq!(config.results.class, "result");
        assert!(config.results.path.ends_with("hits.toml"));
        assert_eq!(config.ui.hscroll_step, 4);
    }
}
