use std::process::ExitCode;

use anyhow::Error;
use rmcp::ServiceExt;

use crate::{
    cli::{LaunchProfile, TransportMode},
    lib::telemetry::{self, RuntimeModeTelemetry},
    server::{
        config::ServerConfig,
        runtime::{build_instructions, DemoServer},
    },
};

/// Bundles a runtime error message with the process exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}

/// Start the MCP server on the transport chosen by the launch profile.
pub async fn run_server(profile: LaunchProfile, config: ServerConfig) -> Result<(), RuntimeExit> {
    let instructions = build_instructions(&profile, &config);
    let server = DemoServer::new(config.clone(), instructions.clone());

    telemetry::emit_runtime_mode(&RuntimeModeTelemetry {
        transport: profile.transport.as_str(),
        server_name: &config.server.name,
        config_path: config.source_path.to_string_lossy().as_ref(),
        prompts_enabled: config.prompts.enabled,
        max_repeat_times: config.tools.max_repeat_times,
        instructions: &instructions,
        launch_args: &profile.launch_args,
    });

    match profile.transport {
        TransportMode::Stdio => run_stdio(server).await,
    }
}

async fn run_stdio(server: DemoServer) -> Result<(), RuntimeExit> {
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(RuntimeExit::from_error)?;
    let reason = running.waiting().await.map_err(RuntimeExit::from_error)?;
    tracing::info!(
        target: "demo_mcp::runtime",
        reason = ?reason,
        "MCP session ended"
    );
    Ok(())
}
