//! Tools, resources, and prompts registered on the server, plus router helpers.

pub mod arithmetic;
pub mod prompts;
pub mod resources;
pub mod text;

use rmcp::handler::server::router::{prompt::PromptRouter, tool::ToolRouter};

pub use arithmetic::{ArithmeticRequest, ArithmeticResponse, ADD_TOOL_ID, SUBTRACT_TOOL_ID};
pub use prompts::{
    MathCoachArgs, MessageRole, PromptTemplate, TemplateMessage, EXPLAIN_TOOL_USAGE_PROMPT_ID,
    MATH_COACH_PROMPT_ID,
};
pub use resources::{ResolvedResource, ResourceTemplateSpec, RESOURCE_TEMPLATES};
pub use text::{RepeatMessageRequest, RepeatMessageResponse, REPEAT_MESSAGE_TOOL_ID};

pub type ServerToolRouter<S> = ToolRouter<S>;
pub type ServerPromptRouter<S> = PromptRouter<S>;

/// Helper for building a tool router.
pub fn build_router<S>(builder: impl FnOnce() -> ServerToolRouter<S>) -> ServerToolRouter<S>
where
    S: Send + Sync + 'static,
{
    builder()
}

/// Build the prompt router, or an empty one when prompts are disabled.
pub fn build_prompt_router<S>(
    enabled: bool,
    builder: impl FnOnce() -> ServerPromptRouter<S>,
) -> ServerPromptRouter<S>
where
    S: Send + Sync + 'static,
{
    if enabled {
        builder()
    } else {
        PromptRouter::new()
    }
}
