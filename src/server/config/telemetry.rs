use tracing::info;

use super::ServerConfig;

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: "demo_mcp::config",
        path = %config.source_path.display(),
        server_name = %config.server.name,
        max_repeat_times = config.tools.max_repeat_times,
        prompts_enabled = config.prompts.enabled,
        "Configuration loaded successfully"
    );
}
