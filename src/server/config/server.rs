use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_SERVER_NAME: &str = "Demo MCP Server";

/// Identity settings shown to MCP clients.
#[derive(Debug, Clone)]
pub struct ServerSection {
    pub name: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawServerSection {
    pub name: Option<String>,
}

pub fn parse_server_section(
    raw: Option<RawServerSection>,
    path: &Path,
) -> Result<ServerSection, ConfigError> {
    let server_raw = raw.unwrap_or_default();
    let name = match server_raw.name {
        Some(name) if name.trim().is_empty() => {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "server.name",
                message: "Server name must not be blank".into(),
            })
        }
        Some(name) => name.trim().to_string(),
        None => DEFAULT_SERVER_NAME.to_string(),
    };
    Ok(ServerSection { name })
}
