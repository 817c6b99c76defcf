use crate::config::SERVER_NAME;
use crate::error::ToolError;
use crate::registry::{self, Operation};
use crate::resources;
use rmcp::{
    model::{
        AnnotateAble, CallToolRequestParam, CallToolResult, Content, Implementation,
        ListResourcesResult, ListToolsResult, PaginatedRequestParam, ProtocolVersion, RawResource,
        ReadResourceRequestParam, ReadResourceResult, Resource, ResourceContents,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

/// MCP ホストにツールテーブルを公開するサービス
///
/// `tools/list` と `tools/call` はどちらも [`registry`] を直接引く。
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolService;

fn tool_definition(op: &Operation) -> Tool {
    Tool::new(op.name, op.description, Arc::new(op.input_schema()))
}

fn resource_definition(doc: &resources::Document) -> Resource {
    let mut raw = RawResource::new(doc.uri, doc.name);
    raw.description = Some(doc.description.to_string());
    raw.mime_type = Some(doc.mime_type.to_string());
    raw.no_annotation()
}

impl ToolService {
    pub fn new() -> Self {
        Self
    }

    pub fn tools(&self) -> Vec<Tool> {
        registry::list_operations()
            .iter()
            .map(tool_definition)
            .collect()
    }

    /// ツール側の失敗は isError 付きの結果として返す。未知のツール名だけはプロトコルエラー。
    pub fn call(&self, request: CallToolRequestParam) -> Result<CallToolResult, McpError> {
        let tool: &str = &request.name;
        let arguments = request.arguments.unwrap_or_default();

        match registry::invoke(tool, &arguments) {
            Ok(value) => {
                debug!(tool, %value, "tool call succeeded");
                Ok(CallToolResult::success(vec![Content::text(value.to_string())]))
            }
            Err(e @ ToolError::UnknownOperation(_)) => {
                warn!(tool, "unknown tool requested");
                Err(McpError::invalid_params(e.to_string(), None))
            }
            Err(e) => {
                warn!(tool, error = %e, "tool call failed");
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }

    pub fn resources(&self) -> Vec<Resource> {
        resources::list().iter().map(resource_definition).collect()
    }

    pub fn read(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        match resources::read(uri) {
            Some(text) => Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(text, uri)],
            }),
            None => Err(McpError::resource_not_found(
                "resource_not_found",
                Some(json!({ "uri": uri })),
            )),
        }
    }
}

impl ServerHandler for ToolService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Demo tool server. Tools: add, subtract, multiply, divide, greet, calculate_factorial. \
                 Read sample://docs/readme for parameter details."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.call(request)
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(self.resources()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read(&request.uri)
    }
}
