mod handlers;
mod requests;

use std::sync::Arc;

use easel_core::{FileStore, Settings, StoreError};
use easel_generate::{palette::PALETTE, parse::TYPE_RULES};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};

use requests::*;

#[derive(Clone)]
pub struct EaselServer {
    store: Arc<FileStore>,
    settings: Arc<Settings>,
    tool_router: ToolRouter<Self>,
}

/// Store failures are reported to the client as tool errors, not protocol errors.
fn respond(result: Result<String, StoreError>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) => {
            log::warn!("tool call failed: {}", e);
            Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
        }
    }
}

#[tool_router]
impl EaselServer {
    pub fn new(store: FileStore, settings: Settings) -> Self {
        Self {
            store: Arc::new(store),
            settings: Arc::new(settings),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "List all canvases as `id  name (WIDTHxHEIGHT)`, one per line")]
    fn list_canvases(&self) -> Result<CallToolResult, McpError> {
        respond(handlers::list_canvases(&*self.store))
    }

    #[tool(
        description = "Create an empty canvas. Width, height and background default to the user's settings. Returns the new canvas as JSON, including its id."
    )]
    fn create_canvas(
        &self,
        Parameters(req): Parameters<CreateCanvasRequest>,
    ) -> Result<CallToolResult, McpError> {
        if req.name.trim().is_empty() {
            return Err(McpError::invalid_params("name must not be empty", None));
        }
        respond(handlers::create_canvas(&*self.store, &self.settings, req))
    }

    #[tool(
        description = "Get a canvas and its elements. Returns {canvas, elements}, elements sorted by zIndex (back to front). Geometry is in canvas units with the origin at the top left."
    )]
    fn get_canvas(
        &self,
        Parameters(req): Parameters<CanvasIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::get_canvas(&*self.store, req))
    }

    #[tool(description = "Update canvas properties. Only the fields present in `changes` are modified.")]
    fn update_canvas(
        &self,
        Parameters(req): Parameters<UpdateCanvasRequest>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::update_canvas(&*self.store, req))
    }

    #[tool(description = "Delete a canvas together with its elements and chat history")]
    fn delete_canvas(
        &self,
        Parameters(req): Parameters<CanvasIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::delete_canvas(&*self.store, req))
    }

    #[tool(
        description = "Add fully specified elements to a canvas. All elements are validated first; if any is invalid nothing is added. New elements are stacked above existing ones. Returns the created elements with their ids."
    )]
    fn add_elements(
        &self,
        Parameters(req): Parameters<AddElementsRequest>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::add_elements(&*self.store, req))
    }

    #[tool(
        description = "Update existing elements. Locked elements are rejected unless the same change sets locked to false. Updates apply in order and stop at the first failure."
    )]
    fn update_elements(
        &self,
        Parameters(req): Parameters<UpdateElementsRequest>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::update_elements(&*self.store, req))
    }

    #[tool(description = "Delete elements by id. Unknown ids are ignored. Returns the number removed.")]
    fn delete_elements(
        &self,
        Parameters(req): Parameters<DeleteElementsRequest>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::delete_elements(&*self.store, req))
    }

    #[tool(
        description = "Generate elements from a short description like \"Add a red circle\" or \"a bold title that says 'Welcome'\". The element is centred on the canvas, or offset from the context elements when given. Returns the created elements."
    )]
    fn generate_elements(
        &self,
        Parameters(req): Parameters<GenerateElementsRequest>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::generate_elements(&*self.store, req))
    }

    #[tool(description = "List the chat history of a canvas, oldest first")]
    fn list_messages(
        &self,
        Parameters(req): Parameters<CanvasIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::list_messages(&*self.store, req))
    }

    #[tool(
        description = "Post a chat message to a canvas. Elements are generated from the message and an assistant reply describing them is recorded. Returns {userMessage, assistantMessage, elements}."
    )]
    fn send_message(
        &self,
        Parameters(req): Parameters<SendMessageRequest>,
    ) -> Result<CallToolResult, McpError> {
        if req.content.trim().is_empty() {
            return Err(McpError::invalid_params("content must not be empty", None));
        }
        respond(handlers::send_chat_message(&*self.store, req))
    }

    #[tool(description = "Delete the chat history of a canvas. Elements are kept.")]
    fn clear_messages(
        &self,
        Parameters(req): Parameters<CanvasIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::clear_messages(&*self.store, req))
    }
}

#[tool_handler]
impl ServerHandler for EaselServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(instructions().into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

const INSTRUCTIONS: &str = r##"Easel is a design canvas. Each canvas holds rectangles, circles, lines and text, plus a chat history.

## Workflow
1. `list_canvases` or `create_canvas` to get a canvas id.
2. `generate_elements` (or `send_message` to also record the exchange in chat) for quick shapes from plain text.
3. `add_elements` when you need exact geometry and styling, `update_elements` to adjust.
4. `get_canvas` to see the result.

Colors are "#RRGGBB" hex. Opacity is 0..1. Lines are positioned by x1/y1/x2/y2 and have no size."##;

fn instructions() -> String {
    let rules = TYPE_RULES
        .iter()
        .map(|(detected, keywords)| format!("- {:?}: {}", detected, keywords.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");
    let colors = PALETTE
        .iter()
        .map(|(name, hex)| format!("{} {}", name, hex))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{}\n\n## Generation keywords\nThe first matching rule decides the element type; anything else becomes a rectangle.\n{}\n\nNamed colors: {}",
        INSTRUCTIONS, rules, colors
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol; logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let settings = easel_core::settings::read_settings();
    let store = FileStore::open_default();
    log::info!("serving canvases from {}", store.root().display());

    let service = EaselServer::new(store, settings)
        .serve(rmcp::transport::io::stdio())
        .await
        .inspect_err(|e| log::error!("MCP server error: {}", e))?;
    service.waiting().await?;
    Ok(())
}
