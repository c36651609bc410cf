use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const ENV_CONFIG_DIR: &str = "ROSTER_CONFIG_DIR";
const DEFAULT_LINE_WIDTH: usize = 100;
const DEFAULT_ACTIVITY_LIMIT: usize = 5;

/// Configuration for roster, stored in config.json under the config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Target width for list and dashboard layouts.
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// How many recent activity entries the dashboard shows.
    #[serde(default = "default_activity_limit")]
    pub activity_limit: usize,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

fn default_activity_limit() -> usize {
    DEFAULT_ACTIVITY_LIMIT
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        // Ensure directory exists
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }
}

/// Picks the config directory: an explicit flag wins, then the
/// `ROSTER_CONFIG_DIR` environment variable, then the platform default.
pub fn resolve_config_dir(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Ok(PathBuf::from(dir));
    }

    let proj_dirs = directories::ProjectDirs::from("com", "roster", "roster")
        .ok_or_else(|| RosterError::Api("Could not determine config dir".into()))?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.line_width, 100);
        assert_eq!(config.activity_limit, 5);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = RosterConfig::load(temp_dir.path().join("missing")).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let config = RosterConfig {
            line_width: 80,
            activity_limit: 3,
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"line_width": 72}"#,
        )
        .unwrap();

        let loaded = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.line_width, 72);
        assert_eq!(loaded.activity_limit, 5);
    }

    #[test]
    fn test_flag_overrides_config_dir() {
        let dir = resolve_config_dir(Some(Path::new("/tmp/roster-test"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/roster-test"));
    }
}
