use anyhow::{Context, Result};
use clap::Parser;
use rmcp::{
    transport::{
        stdio,
        streamable_http_server::{session::local::LocalSessionManager, StreamableHttpService},
    },
    ServiceExt,
};
use sample_mcp::config::{Cli, Command, ServeArgs, Transport, HTTP_PATH};
use sample_mcp::{logging, registry, ToolService};
use serde_json::{Map, Value};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    match cli.command() {
        Command::Serve(args) => serve(args).await,
        Command::Tools => {
            println!("{}", serde_json::to_string_pretty(registry::list_operations())?);
            Ok(())
        }
        Command::Call { name, args } => call(&name, &args),
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    match args.transport {
        Transport::Stdio => {
            info!("starting MCP server on stdio");
            let service = ToolService::new().serve(stdio()).await?;
            service.waiting().await?;
        }
        Transport::Http => {
            let service = StreamableHttpService::new(
                || Ok(ToolService::new()),
                LocalSessionManager::default().into(),
                Default::default(),
            );
            let router = axum::Router::new().nest_service(HTTP_PATH, service);
            let listener = tokio::net::TcpListener::bind(args.bind)
                .await
                .with_context(|| format!("failed to bind {}", args.bind))?;

            info!(addr = %args.bind, path = HTTP_PATH, "starting MCP server on streamable HTTP");
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        warn!(error = %e, "failed to listen for ctrl-c, shutting down");
                    }
                })
                .await?;
        }
    }
    Ok(())
}

fn call(name: &str, raw_args: &str) -> Result<()> {
    let arguments: Map<String, Value> =
        serde_json::from_str(raw_args).context("--args must be a JSON object")?;

    let value = registry::invoke(name, &arguments)?;
    println!("{}", value);
    Ok(())
}
