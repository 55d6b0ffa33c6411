//! Prompt templates (`explain_tool_usage`, `math_coach`).
use std::fmt;

use rmcp::model::{PromptMessage, PromptMessageRole};
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize};

pub const EXPLAIN_TOOL_USAGE_PROMPT_ID: &str = "explain_tool_usage";
pub const MATH_COACH_PROMPT_ID: &str = "math_coach";

/// Speaker of a template message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }

    /// MCP prompt messages have no system role; system text is sent as user text.
    pub fn to_mcp_role(self) -> PromptMessageRole {
        match self {
            MessageRole::System | MessageRole::User => PromptMessageRole::User,
            MessageRole::Assistant => PromptMessageRole::Assistant,
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMessage {
    pub role: MessageRole,
    pub content: String,
}

impl TemplateMessage {
    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Ordered conversation script returned by a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub messages: Vec<TemplateMessage>,
}

impl PromptTemplate {
    pub fn into_prompt_messages(self) -> Vec<PromptMessage> {
        self.messages
            .into_iter()
            .map(|message| PromptMessage::new_text(message.role.to_mcp_role(), message.content))
            .collect()
    }
}

pub fn explain_tool_usage() -> PromptTemplate {
    PromptTemplate {
        messages: vec![TemplateMessage::new(
            MessageRole::System,
            "You are an assistant that explains how to use the MCP demo server tools: \
             add, subtract, and repeat_message. Give short, clear examples for each tool.",
        )],
    }
}

pub fn math_coach(operation: &str, a: i64, b: i64) -> PromptTemplate {
    PromptTemplate {
        messages: vec![
            TemplateMessage::new(
                MessageRole::System,
                "You are a friendly math coach. Explain operations step by step \
                 and keep the tone simple and didactic.",
            ),
            TemplateMessage::new(
                MessageRole::User,
                format!(
                    "Explain how to {operation} the numbers {a} and {b}, and then give the final result."
                ),
            ),
        ],
    }
}

/// Arguments for `math_coach`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MathCoachArgs {
    /// The arithmetic operation to explain (e.g. 'add', 'subtract').
    pub operation: String,
    /// First operand.
    #[serde(deserialize_with = "integer_argument")]
    #[schemars(with = "i64")]
    pub a: i64,
    /// Second operand.
    #[serde(deserialize_with = "integer_argument")]
    #[schemars(with = "i64")]
    pub b: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerArgument {
    Number(i64),
    Text(String),
}

/// Prompt arguments travel as strings; accept `"3"` as well as `3`.
fn integer_argument<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntegerArgument::deserialize(deserializer)? {
        IntegerArgument::Number(value) => Ok(value),
        IntegerArgument::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("`{text}` is not an integer"))),
    }
}
