//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::{build_launch_args, resolve_config_path, LaunchProfile, TransportMode};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    RunServer(LaunchProfile),
    Cli(CliCommand, LaunchProfile),
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the tools, resource templates, and prompts this server exposes.
    #[command(about = "Print the tools, resource templates, and prompts as JSON")]
    Catalog(CatalogArgs),
}

/// Arguments for `catalog`.
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Emit single-line JSON instead of pretty output.
    #[arg(long, default_value_t = false)]
    pub compact: bool,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Demo MCP server: arithmetic tools, greeting resources, math-coach prompts",
    long_about = None
)]
pub struct LaunchProfileArgs {
    /// Transport used to talk to the MCP client.
    #[arg(long, value_enum, default_value_t = TransportMode::Stdio)]
    pub transport: TransportMode,
    /// Path to config.toml (overrides MCP_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchProfileArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(&self) -> Result<LaunchProfile> {
        let (config_path, config_explicit) = resolve_config_path(self.config_override.clone())?;
        let launch_args = build_launch_args(self.transport, &config_path);

        Ok(LaunchProfile {
            config_path,
            config_explicit,
            transport: self.transport,
            launch_args,
        })
    }

    /// Parse CLI args into either server launch mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        let profile = self.build()?;
        match self.command {
            Some(command) => Ok(ParsedCommand::Cli(command, profile)),
            None => Ok(ParsedCommand::RunServer(profile)),
        }
    }
}
