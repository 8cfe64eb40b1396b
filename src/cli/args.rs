//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// A simple greeting library: template-based greetings with a small CLI
#[derive(Parser, Debug)]
#[command(name = "greet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Project directory for local config (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a greeting for each name
    Greet {
        /// Names to greet
        #[arg(num_args = 1..)]
        names: Vec<String>,

        /// Override the greeting template
        #[arg(short, long, env = "GREET_TEMPLATE")]
        template: Option<String>,
    },

    /// Greet every name in a file (one per line, # comments skipped)
    File {
        /// File with names, one per line
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,

        /// Override the greeting template
        #[arg(short, long, env = "GREET_TEMPLATE")]
        template: Option<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Show version and author info
    Info,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
