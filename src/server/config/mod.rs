//! Load and validate server configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod prompts;
pub mod server;
pub mod telemetry;
pub mod tools;

pub use prompts::{parse_prompts_section, PromptsSection, RawPromptsSection};
pub use server::{parse_server_section, RawServerSection, ServerSection, DEFAULT_SERVER_NAME};
pub use tools::{parse_tools_section, RawToolsSection, ToolsSection, DEFAULT_MAX_REPEAT_TIMES};

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub tools: ToolsSection,
    pub prompts: PromptsSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawServerConfig {
    server: Option<RawServerSection>,
    tools: Option<RawToolsSection>,
    prompts: Option<RawPromptsSection>,
}

impl ServerConfig {
    /// Built-in defaults, used when no configuration file exists.
    pub fn with_defaults(source_path: PathBuf) -> Self {
        Self {
            server: ServerSection::default(),
            tools: ToolsSection::default(),
            prompts: PromptsSection::default(),
            source_path,
        }
    }

    /// Load configuration from a file that must exist.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        Self::load(path, true)
    }

    /// Load configuration, falling back to defaults for a missing optional file.
    pub fn load(path: PathBuf, required: bool) -> Result<Self, ConfigError> {
        info!(
            target: "demo_mcp::config",
            path = %path.display(),
            required,
            "Starting configuration load"
        );

        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).required(required));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "demo_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawServerConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "demo_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "demo_mcp::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawServerConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let server = parse_server_section(raw.server, &path)?;
        let tools = parse_tools_section(raw.tools, &path)?;
        let prompts = parse_prompts_section(raw.prompts);

        Ok(Self {
            server,
            tools,
            prompts,
            source_path: path,
        })
    }
}
