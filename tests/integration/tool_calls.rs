use anyhow::Result;
use rmcp::{
    model::{CallToolRequestParam, ErrorCode},
    service::ServiceError,
};
use serde_json::{json, Value};

use crate::common::{arguments, test_config, Session};

#[tokio::test]
async fn list_tools_exposes_the_three_tools() -> Result<()> {
    let session = Session::start(test_config(true)).await?;
    let list = session.client.list_tools(None).await;
    session.shutdown().await;

    let mut names: Vec<String> = list?
        .tools
        .iter()
        .map(|tool| tool.name.to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["add", "repeat_message", "subtract"]);
    Ok(())
}

#[tokio::test]
async fn arithmetic_tools_return_structured_results() -> Result<()> {
    let session = Session::start(test_config(true)).await?;

    let sum = session
        .client
        .call_tool(CallToolRequestParam {
            name: "add".into(),
            arguments: Some(arguments(json!({ "a": 2, "b": 3 }))),
        })
        .await;
    let difference = session
        .client
        .call_tool(CallToolRequestParam {
            name: "subtract".into(),
            arguments: Some(arguments(json!({ "a": 2, "b": 10 }))),
        })
        .await;
    session.shutdown().await;

    let sum = sum.expect("add should succeed");
    assert_eq!(sum.structured_content, Some(json!({ "result": 5 })));
    let difference = difference.expect("subtract should succeed");
    assert_eq!(difference.structured_content, Some(json!({ "result": -8 })));
    Ok(())
}

#[tokio::test]
async fn arithmetic_results_may_exceed_the_operand_range() -> Result<()> {
    let session = Session::start(test_config(true)).await?;

    let sum = session
        .client
        .call_tool(CallToolRequestParam {
            name: "add".into(),
            arguments: Some(arguments(json!({ "a": i64::MAX, "b": 1 }))),
        })
        .await;
    let difference = session
        .client
        .call_tool(CallToolRequestParam {
            name: "subtract".into(),
            arguments: Some(arguments(json!({ "a": i64::MIN, "b": 1 }))),
        })
        .await;
    session.shutdown().await;

    let sum = sum.expect("add past i64::MAX should succeed");
    assert_eq!(sum.is_error, Some(false));
    assert_eq!(
        sum.structured_content,
        Some(json!({ "result": 9_223_372_036_854_775_808_u64 }))
    );

    let difference = difference.expect("subtract past i64::MIN should succeed");
    assert_eq!(difference.is_error, Some(false));
    let result = difference
        .structured_content
        .as_ref()
        .map(|content| content["result"].clone())
        .unwrap_or(Value::Null);
    assert_eq!(result.as_i64(), None, "result: {result}");
    assert_eq!(result.as_f64(), Some(-9_223_372_036_854_775_809.0));
    Ok(())
}

#[tokio::test]
async fn repeat_message_uses_default_times() -> Result<()> {
    let session = Session::start(test_config(true)).await?;

    let once = session
        .client
        .call_tool(CallToolRequestParam {
            name: "repeat_message".into(),
            arguments: Some(arguments(json!({ "message": "hi" }))),
        })
        .await;
    let thrice = session
        .client
        .call_tool(CallToolRequestParam {
            name: "repeat_message".into(),
            arguments: Some(arguments(json!({ "message": "hi", "times": 3 }))),
        })
        .await;
    session.shutdown().await;

    assert_eq!(
        once.expect("default times").structured_content,
        Some(json!({ "result": "hi" }))
    );
    assert_eq!(
        thrice.expect("three repeats").structured_content,
        Some(json!({ "result": "hi hi hi" }))
    );
    Ok(())
}

#[tokio::test]
async fn repeat_message_rejects_non_positive_times() -> Result<()> {
    let session = Session::start(test_config(true)).await?;
    let mut errors = Vec::new();
    for times in [0, -1] {
        let result = session
            .client
            .call_tool(CallToolRequestParam {
                name: "repeat_message".into(),
                arguments: Some(arguments(json!({ "message": "x", "times": times }))),
            })
            .await;
        errors.push(result);
    }
    session.shutdown().await;

    for result in errors {
        let error = match result.expect_err("times < 1 must fail") {
            ServiceError::McpError(inner) => inner,
            other => anyhow::bail!("unexpected error: {other:?}"),
        };
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        let data = error.data.unwrap_or(Value::Null);
        assert_eq!(data["code"], json!("INVALID_ARGUMENT"));
        assert_eq!(data["field"], json!("times"));
        assert_eq!(
            data["details"]["reason"],
            json!("times must be at least 1")
        );
    }
    Ok(())
}

#[tokio::test]
async fn repeat_message_enforces_configured_ceiling() -> Result<()> {
    let session = Session::start(test_config(true)).await?;
    let at_limit = session
        .client
        .call_tool(CallToolRequestParam {
            name: "repeat_message".into(),
            arguments: Some(arguments(json!({ "message": "a", "times": 50 }))),
        })
        .await;
    let over_limit = session
        .client
        .call_tool(CallToolRequestParam {
            name: "repeat_message".into(),
            arguments: Some(arguments(json!({ "message": "a", "times": 51 }))),
        })
        .await;
    session.shutdown().await;

    let at_limit = at_limit.expect("limit itself is allowed");
    let text = at_limit
        .structured_content
        .as_ref()
        .and_then(|value| value["result"].as_str())
        .unwrap_or_default()
        .to_string();
    assert_eq!(text.split(' ').count(), 50);

    match over_limit.expect_err("above limit must fail") {
        ServiceError::McpError(inner) => {
            assert_eq!(inner.code, ErrorCode::INVALID_PARAMS);
            assert_eq!(
                inner.data.unwrap_or(Value::Null)["details"]["reason"],
                json!("times must be at most 50")
            );
        }
        other => anyhow::bail!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn missing_arguments_are_invalid_params() -> Result<()> {
    let session = Session::start(test_config(true)).await?;
    let result = session
        .client
        .call_tool(CallToolRequestParam {
            name: "add".into(),
            arguments: Some(arguments(json!({ "a": 1 }))),
        })
        .await;
    session.shutdown().await;

    match result.expect_err("b is required") {
        ServiceError::McpError(inner) => assert_eq!(inner.code, ErrorCode::INVALID_PARAMS),
        other => anyhow::bail!("unexpected error: {other:?}"),
    }
    Ok(())
}
