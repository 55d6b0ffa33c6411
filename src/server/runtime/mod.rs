//! MCP server startup and tool/prompt/resource registration.
mod catalog;
mod server_info;
mod startup;
mod tool_registry;

pub use catalog::Catalog;
pub use server_info::build_instructions;
pub use startup::{run_server, RuntimeExit};
pub use tool_registry::DemoServer;
