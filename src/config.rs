use clap::{Parser, Subcommand, ValueEnum};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

pub const SERVER_NAME: &str = "sample-mcp";
pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub const DEFAULT_BIND: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8000));
pub const HTTP_PATH: &str = "/mcp";

/// Demo MCP tool server exposing arithmetic, greeting and factorial tools
#[derive(Parser, Debug)]
#[command(name = "sample-mcp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Serve the tools over MCP (default)
    Serve(ServeArgs),

    /// Print the registered tools as JSON
    Tools,

    /// Invoke a tool locally and print its result
    Call {
        /// Tool name, e.g. "add"
        name: String,

        /// Arguments as a JSON object, e.g. '{"a": 1, "b": 2}'
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct ServeArgs {
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Listen address for the HTTP transport
    #[arg(long, default_value_t = DEFAULT_BIND)]
    pub bind: SocketAddr,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            transport: Transport::Stdio,
            bind: DEFAULT_BIND,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// JSON-RPC over stdin/stdout
    Stdio,
    /// Streamable HTTP
    Http,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }
}
