use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_MAX_REPEAT_TIMES: u32 = 1000;

/// Limits applied at the tool boundary.
#[derive(Debug, Clone)]
pub struct ToolsSection {
    /// Upper bound for `repeat_message.times`.
    pub max_repeat_times: u32,
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self {
            max_repeat_times: DEFAULT_MAX_REPEAT_TIMES,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawToolsSection {
    pub max_repeat_times: Option<i64>,
}

pub fn parse_tools_section(
    raw: Option<RawToolsSection>,
    path: &Path,
) -> Result<ToolsSection, ConfigError> {
    let tools_raw = raw.unwrap_or_default();
    let max_repeat_times = match tools_raw.max_repeat_times {
        Some(value) => validate_max_repeat_times(value, path)?,
        None => DEFAULT_MAX_REPEAT_TIMES,
    };
    Ok(ToolsSection { max_repeat_times })
}

fn validate_max_repeat_times(value: i64, path: &Path) -> Result<u32, ConfigError> {
    match u32::try_from(value) {
        Ok(limit) if limit >= 1 => Ok(limit),
        _ => Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "tools.max_repeat_times",
            message: format!("Use a value between 1 and {}", u32::MAX),
        }),
    }
}
