//! Config given as command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct ArgsConfig {
    /// Set config file directory. Overrides the default which is the
    /// current directory.
    #[arg(short, long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub mode: Option<AppMode>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AppMode {
    /// Print API documentation JSON to stdout
    OpenApi,
}

pub fn get_config() -> ArgsConfig {
    ArgsConfig::parse()
}
