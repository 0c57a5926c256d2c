use crate::domain::{
    config::FloodWatchConfig,
    error::{FloodWatchError, FloodWatchResult},
};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration manager
///
/// Resolution order: project config (`.floodwatch/config.toml`, found by
/// walking up from the working directory) wins over the global config under
/// the user's config directory, which wins over built-in defaults.
pub struct ConfigManager {
    global_config_path: PathBuf,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> FloodWatchResult<Self> {
        let global_config_path = Self::get_global_config_path()?;
        let project_config_path = Self::find_project_config_path();

        Ok(Self {
            global_config_path,
            project_config_path,
        })
    }

    /// Load configuration from files
    pub fn load_config(&self) -> FloodWatchResult<FloodWatchConfig> {
        if let Some(project_path) = &self.project_config_path {
            if project_path.exists() {
                return self.load_config_from_path(project_path);
            }
        }

        if self.global_config_path.exists() {
            return self.load_config_from_path(&self.global_config_path);
        }

        Ok(FloodWatchConfig::default())
    }

    /// Save configuration to the global config file
    pub fn save_config(&self, config: &FloodWatchConfig) -> FloodWatchResult<()> {
        if let Some(parent) = self.global_config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| FloodWatchError::Config {
                message: format!("Failed to create config directory: {}", e),
            })?;
        }

        self.save_config_to_path(&self.global_config_path, config)
    }

    /// Get global configuration path
    fn get_global_config_path() -> FloodWatchResult<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| FloodWatchError::Config {
            message: "Could not determine home directory".to_string(),
        })?;

        Ok(home.join(".config").join("floodwatch").join("config.toml"))
    }

    /// Find project configuration path by walking up directory tree
    fn find_project_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut path = current_dir.as_path();

        loop {
            let config_path = path.join(".floodwatch").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> FloodWatchResult<FloodWatchConfig> {
        let content = fs::read_to_string(path).map_err(|e| FloodWatchError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| FloodWatchError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Save configuration to specific path
    pub fn save_config_to_path(
        &self,
        path: &Path,
        config: &FloodWatchConfig,
    ) -> FloodWatchResult<()> {
        let content = toml::to_string_pretty(config).map_err(|e| FloodWatchError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, content).map_err(|e| FloodWatchError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })
    }

    /// Create default project configuration
    pub fn init_project_config(&self, path: &Path) -> FloodWatchResult<()> {
        let config_dir = path.join(".floodwatch");
        let config_file = config_dir.join("config.toml");

        if config_file.exists() {
            return Err(FloodWatchError::Config {
                message: "Project configuration already exists".to_string(),
            });
        }

        fs::create_dir_all(&config_dir).map_err(|e| FloodWatchError::Config {
            message: format!("Failed to create .floodwatch directory: {}", e),
        })?;

        self.save_config_to_path(&config_file, &FloodWatchConfig::default())?;

        Ok(())
    }

    /// Get the current project config path (if any)
    pub fn get_project_config_path(&self) -> Option<&PathBuf> {
        self.project_config_path.as_ref()
    }

    /// Get the global config path
    pub fn get_global_config_path_ref(&self) -> &PathBuf {
        &self.global_config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_manager_creation() {
        let _manager = ConfigManager::new().unwrap();
    }

    #[test]
    fn test_init_project_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::new().unwrap();

        manager.init_project_config(temp_dir.path()).unwrap();

        let config_file = temp_dir.path().join(".floodwatch").join("config.toml");
        assert!(config_file.exists());

        let content = fs::read_to_string(&config_file).unwrap();
        let config: FloodWatchConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.session.timeout_minutes, 30);
        assert_eq!(config.realtime.max_reconnect_attempts, 5);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::new().unwrap();

        manager.init_project_config(temp_dir.path()).unwrap();
        assert!(manager.init_project_config(temp_dir.path()).is_err());
    }

    #[test]
    fn test_load_from_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        fs::write(&path, "[session]\ntimeout_minutes = 45\n").unwrap();

        let config = manager.load_config_from_path(&path).unwrap();
        assert_eq!(config.session.timeout_minutes, 45);
        assert_eq!(config.session.warning_minutes, 5);
    }
}
