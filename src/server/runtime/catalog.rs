//! Snapshot of everything a server instance exposes, for the `catalog` command.
use rmcp::model::{Prompt, ResourceTemplate, Tool};
use serde::Serialize;

use crate::tools::resources;

use super::DemoServer;

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub server: String,
    pub tools: Vec<Tool>,
    pub resource_templates: Vec<ResourceTemplate>,
    pub prompts: Vec<Prompt>,
}

impl Catalog {
    pub fn from_server(server: &DemoServer) -> Self {
        let mut tools = server.tool_list();
        tools.sort_by(|left, right| left.name.cmp(&right.name));
        let mut prompts = server.prompt_list();
        prompts.sort_by(|left, right| left.name.cmp(&right.name));

        Self {
            server: server.config().server.name.clone(),
            tools,
            resource_templates: resources::list_templates(),
            prompts,
        }
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name.as_ref()).collect()
    }

    pub fn prompt_names(&self) -> Vec<&str> {
        self.prompts.iter().map(|prompt| prompt.name.as_str()).collect()
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
