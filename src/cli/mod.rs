//! CLI entrypoint module structure.
use anyhow::{Context, Result};

use crate::server::{
    config::ServerConfig,
    runtime::{build_instructions, Catalog, DemoServer},
};

pub mod args;
pub mod profile;

pub use args::{CatalogArgs, CliCommand, LaunchProfileArgs, ParsedCommand};
pub use profile::{build_launch_args, resolve_config_path, LaunchProfile, TransportMode};

/// Load configuration for a profile, honoring whether the file must exist.
pub fn load_config(profile: &LaunchProfile) -> Result<ServerConfig> {
    ServerConfig::load(profile.config_path.clone(), profile.config_explicit).with_context(|| {
        format!(
            "failed to load configuration from {}",
            profile.config_path.display()
        )
    })
}

/// Execute CLI command mode and return a user-facing result payload.
pub fn execute_cli_command(command: CliCommand, profile: &LaunchProfile) -> Result<String> {
    let config = load_config(profile)?;
    match command {
        CliCommand::Catalog(args) => render_catalog(config, profile, args.compact),
    }
}

fn render_catalog(config: ServerConfig, profile: &LaunchProfile, compact: bool) -> Result<String> {
    let instructions = build_instructions(profile, &config);
    let server = DemoServer::new(config, instructions);
    let catalog = Catalog::from_server(&server);
    let rendered = if compact {
        serde_json::to_string(&catalog)
    } else {
        catalog.to_pretty_json()
    };
    rendered.context("failed to serialize catalog")
}
