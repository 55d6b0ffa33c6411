use crate::{cli::LaunchProfile, server::config::ServerConfig};

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(profile: &LaunchProfile, config: &ServerConfig) -> String {
    let prompts = if config.prompts.enabled {
        "; prompts: explain_tool_usage, math_coach"
    } else {
        ""
    };
    format!(
        "{name}: tools add, subtract, repeat_message (times <= {limit}); resources greeting://{{name}}, farewell://{{name}}{prompts}. Loaded config {path}; serving over {transport}.",
        name = config.server.name,
        limit = config.tools.max_repeat_times,
        path = config.source_path.display(),
        transport = profile.transport.as_str(),
    )
}
