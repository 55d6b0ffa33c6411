use std::{process::Command as StdCommand, time::Duration};

use anyhow::Result;
use rmcp::{
    model::{CallToolRequestParam, ClientInfo},
    serve_client,
};
use serde_json::{json, Value};
use tokio::time::timeout;

use crate::common::{arguments, fixture, spawn_server_process, BINARY_PATH};

#[tokio::test]
async fn inspector_style_spawn_serves_tools_over_stdio() -> Result<()> {
    let (mut child, transport, stderr_task) =
        spawn_server_process("tests/fixtures/config_valid.toml").await?;

    let client = serve_client(ClientInfo::default(), transport).await?;
    let instructions = client
        .peer_info()
        .and_then(|info| info.instructions.clone())
        .unwrap_or_default();
    let server_name = client
        .peer_info()
        .map(|info| info.server_info.name.clone());
    let list = client.list_tools(None).await?;
    let repeated = client
        .call_tool(CallToolRequestParam {
            name: "repeat_message".into(),
            arguments: Some(arguments(json!({ "message": "echo", "times": 2 }))),
        })
        .await?;

    client.cancel().await?;
    let status = timeout(Duration::from_secs(5), child.wait()).await??;
    if let Some(handle) = stderr_task {
        let _ = handle.await;
    }

    assert!(
        instructions.starts_with("Demo MCP Server (tests)"),
        "instructions: {instructions}"
    );
    assert_eq!(server_name.as_deref(), Some("Demo MCP Server (tests)"));
    assert!(
        list.tools.iter().any(|tool| tool.name.as_ref() == "add"),
        "list_tools should include add: {:?}",
        list.tools
    );
    assert_eq!(
        repeated.structured_content,
        Some(json!({ "result": "echo echo" }))
    );
    assert!(
        status.success(),
        "server should exit cleanly but exit status was {status:?}"
    );
    Ok(())
}

#[test]
fn catalog_command_prints_registry() {
    let output = StdCommand::new(BINARY_PATH)
        .args([
            "--config",
            &fixture("tests/fixtures/config_prompts_disabled.toml"),
            "catalog",
        ])
        .env("RUST_LOG", "error")
        .output()
        .expect("process should start");

    assert!(output.status.success(), "catalog failed: {output:?}");
    let catalog: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(catalog["server"], json!("Demo MCP Server"));
    assert_eq!(catalog["tools"].as_array().map(Vec::len), Some(3));
    assert_eq!(catalog["resource_templates"].as_array().map(Vec::len), Some(2));
    assert_eq!(catalog["prompts"], json!([]));
}

#[test]
fn invalid_config_exits_with_failure() {
    let output = StdCommand::new(BINARY_PATH)
        .env(
            "MCP_CONFIG_PATH",
            fixture("tests/fixtures/config_invalid_repeat_limit.toml"),
        )
        .env("RUST_LOG", "error")
        .stdin(std::process::Stdio::null())
        .output()
        .expect("process should start");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("tools.max_repeat_times"),
        "stderr should name the invalid field: {stderr}"
    );
}
