use std::net::SocketAddr;

use telegram_mcp_gateway::clients::telegram::TelegramRemote;
use telegram_mcp_gateway::infra;
use telegram_mcp_gateway::infra::config::{Config, Destination};
use telegram_mcp_gateway::tools::send_message::tool_router::NotifySvc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    infra::logging::init();

    let cfg = Config::from_env();
    let dest = Destination::from_env();
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        chat_id = ?dest.chat_id,
        "BOOT telegram-mcp-gateway"
    );
    if dest.token.is_empty() {
        tracing::warn!("env var `token` is empty; sends will fail until it is set");
    }
    if dest.chat_id.is_none() {
        tracing::warn!("env var `chat_id` is missing or not an integer; sends will fail until it is set");
    }

    // One client handle for the process lifetime; both transports share it.
    let sender = TelegramRemote::new(dest.api_base.clone(), dest.token.clone());

    // Stdio mode: run MCP over stdin/stdout ONLY (no HTTP).
    if cfg.mode == "stdio" {
        let factory = {
            let sender = sender.clone();
            let chat_id = dest.chat_id;
            move || {
                let handler = NotifySvc { sender, chat_id };
                (handler, NotifySvc::router())
            }
        };
        infra::runtime::mcp_transport::serve_stdio(factory)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    // HTTP server: /healthz + streamable MCP at /mcp + JSON-RPC shim at /v1/rpc.
    let app = infra::http_app::build_app(sender, &dest);
    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
