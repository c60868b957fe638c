//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "semtag")]
#[command(about = "Semantic tag registry for Rust source trees", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new tag registry
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List tag sites matching a query
    Sites {
        /// Tag query (e.g., "current_time_millis AND NOT duration_millis")
        query: String,
    },

    /// List declared tags with site counts
    Tags,

    /// Lint every tag site in the source tree
    Check,

    /// Generate the documentation report for a tag
    Doc {
        /// Tag to document
        tag: String,

        /// Output file (default: .semtag/docs/<tag>.md)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
