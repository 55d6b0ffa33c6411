//! Telemetry initialization and per-call span helpers.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
///
/// Logs go to stderr because stdout carries the MCP stdio transport.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Kind of catalog entry a call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Tool,
    Resource,
    Prompt,
}

impl CallKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CallKind::Tool => "tool",
            CallKind::Resource => "resource",
            CallKind::Prompt => "prompt",
        }
    }
}

/// Span helper recording start and finish of a single MCP call.
pub struct CallSpan {
    span: Span,
    started_at: Instant,
    call_id: Uuid,
    name: String,
}

impl CallSpan {
    pub fn start(kind: CallKind, name: impl Into<String>) -> Self {
        let call_id = Uuid::new_v4();
        let name = name.into();
        let span = info_span!(
            target: "demo_mcp::tools",
            "mcp_call",
            %call_id,
            kind = kind.as_str(),
            name = %name
        );
        Self {
            span,
            started_at: Instant::now(),
            call_id,
            name,
        }
    }

    pub fn call_id(&self) -> Uuid {
        self.call_id
    }

    /// Close the span while recording status and elapsed time.
    pub fn finish(self, status: &'static str) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "demo_mcp::tools",
            call_id = %self.call_id,
            name = %self.name,
            status = status,
            elapsed_ms = elapsed_ms,
            "Completed MCP call"
        );
    }

    /// Finish with `ok`/`error` derived from a handler result.
    pub fn finish_with<T, E>(self, result: &std::result::Result<T, E>) {
        let status = if result.is_ok() { "ok" } else { "error" };
        self.finish(status);
    }
}

/// Payload for logging MCP runtime state as structured telemetry.
#[derive(Debug, Serialize)]
pub struct RuntimeModeTelemetry<'a> {
    pub transport: &'a str,
    pub server_name: &'a str,
    pub config_path: &'a str,
    pub prompts_enabled: bool,
    pub max_repeat_times: u32,
    pub instructions: &'a str,
    pub launch_args: &'a [String],
}

/// Emit runtime mode to `tracing`.
pub fn emit_runtime_mode(telemetry: &RuntimeModeTelemetry<'_>) {
    info!(
        target: "demo_mcp::runtime",
        transport = telemetry.transport,
        server_name = telemetry.server_name,
        config_path = telemetry.config_path,
        prompts_enabled = telemetry.prompts_enabled,
        max_repeat_times = telemetry.max_repeat_times,
        instructions = telemetry.instructions,
        launch_args = ?telemetry.launch_args,
        "Started MCP server"
    );
}
