use axum::Json;
use serde_json::{json, Value as J};

use crate::core::mcp::{RpcReq, RpcResp};
use crate::domain::ToolError;
use crate::infra::http::json as http_json;
use crate::tools::registry::ToolRegistry;

fn tools_list(reg: &ToolRegistry) -> J {
    let tools: Vec<J> = reg
        .list()
        .into_iter()
        .map(|t| {
            json!({ "name": t.name, "description": t.description, "inputSchema": t.input_schema })
        })
        .collect();
    json!({ "tools": tools })
}

async fn call_tool(reg: &ToolRegistry, params: &J) -> Result<J, ToolError> {
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::InvalidArgument("missing tool name".into()))?;
    let args = params.get("arguments").cloned().unwrap_or(J::Null);
    reg.call(name, &args).await
}

/// JSON-RPC POST handler for the `/v1/rpc` compatibility path. Parses the
/// body itself so a malformed frame gets a -32700 envelope instead of an
/// extractor rejection.
pub async fn http(
    axum::extract::State(reg): axum::extract::State<ToolRegistry>,
    body: String,
) -> Json<RpcResp> {
    let req: RpcReq = match serde_json::from_str(&body) {
        Ok(r) => r,
        Err(e) => return http_json::parse_error(format!("parse error: {e}")),
    };
    tracing::debug!(method = %req.method, id = ?req.id, "rpc handler invoked");
    let id = req.id.clone();
    let resp = match req.method.as_str() {
        "initialize" => http_json::ok(
            id,
            json!({ "serverInfo": { "name": "telegram-mcp-gateway", "version": env!("CARGO_PKG_VERSION") }, "capabilities": {} }),
        )
        .0,
        "shutdown" => http_json::ok(id, J::Null).0,
        "tools.list" | "tools/list" => http_json::ok(id, tools_list(&reg)).0,
        "tools.call" | "tools/call" => match call_tool(&reg, &req.params).await {
            Ok(out) => http_json::ok(id, out).0,
            Err(e) => {
                let resp = http_json::error(id, -32000, e.to_string()).0;
                tracing::warn!(response = ?resp, "tools.call error response");
                resp
            }
        },
        _ => http_json::error(id, -32601, format!("unknown method: {}", req.method)).0,
    };
    Json(resp)
}
