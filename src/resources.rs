//! 読み取り専用のリソース。内容はすべてツールテーブルから生成する。

use crate::config::{PROTOCOL_VERSION, SERVER_NAME};
use crate::registry::{self, Operation};
use serde_json::json;
use std::fmt::Write;

pub const CONFIG_URI: &str = "sample://config";
pub const README_URI: &str = "sample://docs/readme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}

pub static DOCUMENTS: &[Document] = &[
    Document {
        uri: CONFIG_URI,
        name: "Server Configuration",
        description: "Server name, version and registered tools",
        mime_type: "application/json",
    },
    Document {
        uri: README_URI,
        name: "Documentation",
        description: "README describing every tool and its parameters",
        mime_type: "text/markdown",
    },
];

pub fn list() -> &'static [Document] {
    DOCUMENTS
}

pub fn find(uri: &str) -> Option<&'static Document> {
    DOCUMENTS.iter().find(|d| d.uri == uri)
}

/// 未知の URI は `None`
pub fn read(uri: &str) -> Option<String> {
    match uri {
        CONFIG_URI => Some(config_json()),
        README_URI => Some(readme()),
        _ => None,
    }
}

fn config_json() -> String {
    let tools: Vec<&str> = registry::list_operations().iter().map(|op| op.name).collect();
    let config = json!({
        "server_name": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "protocol_version": PROTOCOL_VERSION,
        "tools": tools,
    });
    format!("{:#}", config)
}

fn signature(op: &Operation) -> String {
    let params: Vec<String> = op
        .parameters
        .iter()
        .map(|p| match p.default {
            Some(default) => format!("{}: {} = \"{}\"", p.name, p.ty.schema_type(), default),
            None => format!("{}: {}", p.name, p.ty.schema_type()),
        })
        .collect();
    format!("{}({}) -> {}", op.name, params.join(", "), op.returns.schema_type())
}

fn readme() -> String {
    let mut doc = format!(
        "# {}\n\nDemo Model Context Protocol server exposing pure tools.\n\n## Tools\n\n",
        SERVER_NAME
    );
    for op in registry::list_operations() {
        // String への write! は失敗しない
        let _ = writeln!(doc, "- `{}`: {}", signature(op), op.description);
    }
    doc
}
