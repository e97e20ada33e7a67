//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eogtricks")]
#[command(about = "Image viewer tricks: filename tags, quick move and more", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a settings directory
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

    /// Show the tags in file names
    Show {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Edit a file's tags and rename it
    Edit {
        file: PathBuf,

        /// New tags as "leading / trailing" (prompted for when omitted)
        tags: Option<String>,

        /// Print the new name without renaming
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List every tag used in file names
    Tags {
        /// Directory to scan (default: current directory)
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Include subdirectories
        #[arg(short, long)]
        recursive: bool,
    },

    /// Move files into the quick move folder
    Move {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Target folder (default: configured quick_move_target)
        #[arg(long, value_name = "DIR")]
        to: Option<PathBuf>,
    },

    /// List the viewer plugins and their key bindings
    Plugins,
}
