use axum::{
    routing::{any_service, get, post},
    Router,
};
use std::sync::Arc;

use crate::clients::telegram::TelegramRemote;
use crate::infra::config::Destination;
use crate::infra::runtime::mcp_transport;
use crate::tools::registry::build_registry;
use crate::tools::send_message::tool_router::NotifySvc;

/// Full HTTP app: `/healthz`, streamable MCP at `/mcp`, JSON-RPC shim at `/v1/rpc`.
pub fn build_app(sender: TelegramRemote, dest: &Destination) -> Router {
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let factory = {
        let sender = sender.clone();
        let chat_id = dest.chat_id;
        move || {
            let handler = NotifySvc { sender: sender.clone(), chat_id };
            (handler, NotifySvc::router())
        }
    };
    let mcp_service = mcp_transport::make_streamable_http_service(factory, session_mgr);

    let registry = build_registry(sender, dest.chat_id);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
        .route("/v1/rpc", post(crate::api::rpc::http))
        .with_state(registry)
}
