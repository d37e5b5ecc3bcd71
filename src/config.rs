//! User configuration management

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Printed before every line read in an interactive session
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

fn default_prompt() -> String {
    "> ".to_string()
}

pub fn get_app_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine the config directory")?;
    Ok(dir.join("task-list"))
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let temp = tempfile::TempDir::new()?;
        let config = Config::load_from(&temp.path().join("config.toml"))?;
        assert_eq!(config, Config::default());
        assert_eq!(config.prompt, "> ");
        Ok(())
    }

    #[test]
    fn test_load_prompt() -> Result<()> {
        let temp = tempfile::TempDir::new()?;
        let path = temp.path().join("config.toml");
        fs::write(&path, "prompt = \"tasks> \"\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.prompt, "tasks> ");
        Ok(())
    }

    #[test]
    fn test_empty_file_uses_field_defaults() -> Result<()> {
        let temp = tempfile::TempDir::new()?;
        let path = temp.path().join("config.toml");
        fs::write(&path, "")?;

        assert_eq!(Config::load_from(&path)?, Config::default());
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<()> {
        let temp = tempfile::TempDir::new()?;
        let path = temp.path().join("config.toml");
        fs::write(&path, "prompt = [")?;

        assert!(Config::load_from(&path).is_err());
        Ok(())
    }
}
