//! Configuration management

use crate::domain::tags::definition::{is_valid_tag_name, TagDefinition};
use crate::error::{Result, SemtagError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for tagged declarations, relative to the root
    pub source_dir: String,

    pub created: DateTime<Utc>,

    /// Declared tags; `init` seeds the built-in `current_time_millis`
    #[serde(default)]
    pub tags: Vec<TagDefinition>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            source_dir: "src".to_string(),
            created: Utc::now(),
            tags: vec![TagDefinition::current_time_millis()],
        }
    }

    /// Load config from .semtag/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".semtag").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SemtagError::NotSemtagProject(path.to_path_buf())
            } else {
                SemtagError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| SemtagError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .semtag/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let semtag_dir = path.join(".semtag");
        let config_path = semtag_dir.join("config.toml");

        if !semtag_dir.exists() {
            fs::create_dir(&semtag_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SemtagError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Look up a declared tag by name
    pub fn find_tag(&self, name: &str) -> Option<&TagDefinition> {
        self.tags.iter().find(|tag| tag.name == name)
    }

    fn validate(&self) -> Result<()> {
        for tag in &self.tags {
            if !is_valid_tag_name(&tag.name) {
                return Err(SemtagError::Config(format!(
                    "Invalid tag name in config: '{}'. Tag names use lowercase letters, \
                    digits, and underscores",
                    tag.name
                )));
            }
        }

        for (index, tag) in self.tags.iter().enumerate() {
            if self.tags[..index].iter().any(|other| other.name == tag.name) {
                return Err(SemtagError::Config(format!(
                    "Tag '{}' is declared more than once in config.toml",
                    tag.name
                )));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
