//! File system repository

use crate::error::{Result, SemtagError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract repository for registry project operations
pub trait ProjectRepository {
    /// Get the root directory of this project
    fn root(&self) -> &Path;

    /// Load configuration from .semtag/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .semtag/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .semtag directory exists
    fn is_initialized(&self) -> bool;

    /// Create .semtag directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of ProjectRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the project root
    ///
    /// Checks the SEMTAG_ROOT environment variable first, then walks up
    /// from the current directory looking for .semtag/.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("SEMTAG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_semtag_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(SemtagError::Config(format!(
                    "SEMTAG_ROOT is set to '{}' but no .semtag directory found. \
                    Run 'semtag init' in that directory or unset SEMTAG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the project root by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_semtag_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(SemtagError::NotSemtagProject(start.to_path_buf()));
                }
            }
        }
    }

    fn has_semtag_dir(path: &Path) -> bool {
        path.join(".semtag").is_dir()
    }
}

impl ProjectRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_semtag_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let semtag_dir = self.root.join(".semtag");

        if semtag_dir.exists() {
            return Err(SemtagError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&semtag_dir)?;
        Ok(())
    }
}

// Source tree operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// List every .rs file under the source directory, sorted by path
    ///
    /// Hidden directories and `target/` are skipped. Returned paths are
    /// relative to the project root. A missing source directory is an
    /// empty scan, not an error.
    pub fn list_sources(&self, source_dir: &str) -> Result<Vec<PathBuf>> {
        let base = self.root.join(source_dir);
        if !base.is_dir() {
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(&base)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.') && name != "target")
            });

        let mut sources = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let is_rust = entry
                .path()
                .extension()
                .is_some_and(|extension| extension == "rs");
            if !is_rust {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            sources.push(rel.to_path_buf());
        }

        sources.sort();
        Ok(sources)
    }

    /// Read a source file by root-relative path
    pub fn read_source(&self, path: &Path) -> Result<String> {
        fs::read_to_string(self.root.join(path)).map_err(SemtagError::Io)
    }

    /// Write a generated report, creating parent directories as needed
    pub fn write_report(&self, path: &Path, content: &str) -> Result<()> {
        let full = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };

        if let Some(parent) = full.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&full, content).map_err(SemtagError::Io)
    }
}
