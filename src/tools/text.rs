//! Text utility tool (`repeat_message`).
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lib::errors::ToolError;

pub const REPEAT_MESSAGE_TOOL_ID: &str = "repeat_message";

fn default_times() -> i64 {
    1
}

/// Input for `repeat_message`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RepeatMessageRequest {
    /// Text to repeat.
    pub message: String,
    /// How many times to repeat the message (at least 1).
    #[serde(default = "default_times")]
    pub times: i64,
}

/// Repeated text wrapped as structured content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct RepeatMessageResponse {
    pub result: String,
}

/// Repeat `message` `times` times, separated by single spaces.
pub fn repeat_message(message: &str, times: i64) -> Result<String, ToolError> {
    if times < 1 {
        return Err(ToolError::invalid_argument(
            "times",
            "times must be at least 1",
        ));
    }
    let count = usize::try_from(times)
        .map_err(|_| ToolError::invalid_argument("times", "times is too large"))?;
    Ok(vec![message; count].join(" "))
}

/// Reject repeat counts above the configured ceiling.
pub fn ensure_within_limit(times: i64, max_repeat_times: u32) -> Result<(), ToolError> {
    if times > i64::from(max_repeat_times) {
        return Err(ToolError::invalid_argument(
            "times",
            format!("times must be at most {max_repeat_times}"),
        ));
    }
    Ok(())
}
