use std::sync::Arc;

use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler},
    model::{
        ErrorData, GetPromptRequestParam, GetPromptResult, Implementation,
        ListPromptsResult, ListResourceTemplatesResult, PaginatedRequestParam, PromptMessage,
        ReadResourceRequestParam, ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    prompt, prompt_handler, prompt_router,
    service::RequestContext,
    tool, tool_handler, tool_router, Json, RoleServer,
};

use crate::{
    lib::telemetry::{CallKind, CallSpan},
    server::config::ServerConfig,
    tools::{
        self, arithmetic, prompts, resources, text, ArithmeticRequest, ArithmeticResponse,
        MathCoachArgs, RepeatMessageRequest, RepeatMessageResponse, ServerPromptRouter,
        ServerToolRouter, ADD_TOOL_ID, EXPLAIN_TOOL_USAGE_PROMPT_ID, MATH_COACH_PROMPT_ID,
        REPEAT_MESSAGE_TOOL_ID, SUBTRACT_TOOL_ID,
    },
};

#[derive(Clone)]
pub struct DemoServer {
    config: Arc<ServerConfig>,
    instructions: Arc<String>,
    tool_router: ServerToolRouter<Self>,
    prompt_router: ServerPromptRouter<Self>,
}

impl DemoServer {
    pub fn new(config: ServerConfig, instructions: String) -> Self {
        let tool_router = tools::build_router(Self::tool_router);
        let prompt_router =
            tools::build_prompt_router(config.prompts.enabled, Self::prompt_router);
        Self {
            config: Arc::new(config),
            instructions: Arc::new(instructions),
            tool_router,
            prompt_router,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn prompts_enabled(&self) -> bool {
        self.config.prompts.enabled
    }

    pub(crate) fn tool_list(&self) -> Vec<rmcp::model::Tool> {
        self.tool_router.list_all()
    }

    pub(crate) fn prompt_list(&self) -> Vec<rmcp::model::Prompt> {
        self.prompt_router.list_all()
    }
}

#[tool_router(router = tool_router)]
impl DemoServer {
    #[tool(name = "add", description = "Add two integer numbers and return the sum")]
    async fn add(
        &self,
        Parameters(request): Parameters<ArithmeticRequest>,
    ) -> Json<ArithmeticResponse> {
        let span = CallSpan::start(CallKind::Tool, ADD_TOOL_ID);
        let result = arithmetic::add(request.a, request.b);
        span.finish("ok");
        Json(ArithmeticResponse { result })
    }

    #[tool(
        name = "subtract",
        description = "Subtract b from a and return the difference"
    )]
    async fn subtract(
        &self,
        Parameters(request): Parameters<ArithmeticRequest>,
    ) -> Json<ArithmeticResponse> {
        let span = CallSpan::start(CallKind::Tool, SUBTRACT_TOOL_ID);
        let result = arithmetic::subtract(request.a, request.b);
        span.finish("ok");
        Json(ArithmeticResponse { result })
    }

    #[tool(
        name = "repeat_message",
        description = "Repeat a message a given number of times, separated by spaces"
    )]
    async fn repeat_message(
        &self,
        Parameters(request): Parameters<RepeatMessageRequest>,
    ) -> Result<Json<RepeatMessageResponse>, ErrorData> {
        let span = CallSpan::start(CallKind::Tool, REPEAT_MESSAGE_TOOL_ID);
        let result = text::ensure_within_limit(request.times, self.config.tools.max_repeat_times)
            .and_then(|_| text::repeat_message(&request.message, request.times))
            .map(|result| Json(RepeatMessageResponse { result }))
            .map_err(|err| {
                tracing::warn!(
                    target: "demo_mcp::tools",
                    call_id = %span.call_id(),
                    field = err.field(),
                    reason = %err,
                    "Rejected repeat_message arguments"
                );
                ErrorData::from(err)
            });
        span.finish_with(&result);
        result
    }
}

#[prompt_router]
impl DemoServer {
    #[prompt(
        name = "explain_tool_usage",
        description = "Explain how the demo tools add, subtract, and repeat_message work"
    )]
    async fn explain_tool_usage(&self) -> Result<Vec<PromptMessage>, ErrorData> {
        let span = CallSpan::start(CallKind::Prompt, EXPLAIN_TOOL_USAGE_PROMPT_ID);
        let messages = prompts::explain_tool_usage().into_prompt_messages();
        span.finish("ok");
        Ok(messages)
    }

    #[prompt(
        name = "math_coach",
        description = "Coach the model to explain an arithmetic operation step by step"
    )]
    async fn math_coach(
        &self,
        Parameters(args): Parameters<MathCoachArgs>,
    ) -> Result<Vec<PromptMessage>, ErrorData> {
        let span = CallSpan::start(CallKind::Prompt, MATH_COACH_PROMPT_ID);
        let messages = prompts::math_coach(&args.operation, args.a, args.b).into_prompt_messages();
        span.finish("ok");
        Ok(messages)
    }
}

#[tool_handler(router = self.tool_router)]
#[prompt_handler]
impl ServerHandler for DemoServer {
    fn get_info(&self) -> ServerInfo {
        let capabilities = if self.prompts_enabled() {
            ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build()
        } else {
            ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build()
        };
        ServerInfo {
            capabilities,
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult::with_all_items(
            resources::list_templates(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let span = CallSpan::start(CallKind::Resource, request.uri.as_str());
        let result = resources::read_resource(&request.uri)
            .map(|resolved| ReadResourceResult {
                contents: vec![resolved.into_contents()],
            })
            .map_err(ErrorData::from);
        span.finish_with(&result);
        result
    }
}
