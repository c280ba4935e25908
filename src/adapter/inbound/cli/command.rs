//! Command-line interface definitions.
//!
//! Defines the CLI structure for the arb-proposal application using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Two-legged arbitrage proposal evaluation CLI
#[derive(Parser, Debug)]
#[command(name = "arb-proposal")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build proposals between the configured markets and report their profit
    Evaluate(EvaluateArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `arb-proposal evaluate`.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Show every proposal, including unprofitable and undefined ones
    #[arg(long)]
    pub all: bool,
}

/// Subcommands for `arb-proposal config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a configuration template.
    Init(ConfigInitArgs),
    /// Check that a configuration file loads and validates.
    Validate(ConfigPathArg),
}

/// Arguments for `config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Destination path
    #[arg(default_value = "config.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Config path argument shared by config subcommands.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}
