//! Config management use case

use crate::error::{Result, SemtagError};
use crate::infrastructure::{Config, FileSystemRepository, ProjectRepository};

/// Service for managing registry configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "source_dir" => Ok(config.source_dir.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SemtagError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: source_dir, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "source_dir" => {
                config.source_dir = value.to_string();
            }
            "created" => {
                return Err(SemtagError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SemtagError::Config(format!(
                    "Unknown config key: '{}'. Settable keys are: source_dir",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
