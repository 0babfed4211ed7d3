//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for plainsight using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// plainsight - PHI surrogate substitution for Dutch medical text
#[derive(Parser, Debug)]
#[command(name = "plainsight")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "plainsight.toml", env = "PLAINSIGHT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PLAINSIGHT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anonymize a document: replace every recognized tag with a surrogate
    Run(commands::run::RunArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
