//! Roster command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// The config file read when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "./roster.toml";

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Loads and prints the list once, then exits.
    #[arg(long)]
    pub once: bool,
}

impl Args {
    /// The config path to load, falling back to [`DEFAULT_CONFIG_PATH`].
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}
