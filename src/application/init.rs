//! Initialize a semtag project

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, ProjectRepository};
use std::fs;
use std::path::Path;

/// Initialize the registry at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .semtag directory
    repo.initialize()?;

    // Default config declares the built-in current_time_millis tag
    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized semtag project at {}", path.display());
    println!("Declared tags: current_time_millis");

    Ok(())
}
