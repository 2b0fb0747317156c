use std::future::Future;

use rmcp::handler::server::tool::{Parameters, ToolRouter};
use rmcp::model::{CallToolResult, Content, JsonObject};

use crate::clients::telegram::TelegramRemote;
use crate::domain::{CONFIRMATION_TEXT, SEND_FAILED_TEXT};
use crate::infra::runtime::mcp_transport::ServerHandler;

/// The MCP server handler: the shared Telegram client plus the fixed chat.
#[derive(Clone)]
pub struct NotifySvc {
    pub sender: TelegramRemote,
    pub chat_id: Option<i64>,
}

impl ServerHandler for NotifySvc {}

#[rmcp::tool_router]
impl NotifySvc {
    #[rmcp::tool(
        name = "sent_message",
        description = "Send a text message to the configured Telegram chat"
    )]
    async fn sent_message(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let message = params
            .0
            .get("message")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                rmcp::ErrorData::invalid_params("missing required field: message", None)
            })?
            .to_owned();
        let Some(chat_id) = self.chat_id else {
            tracing::warn!("send failed: chat_id not configured");
            return Err(rmcp::ErrorData::internal_error(SEND_FAILED_TEXT, None));
        };
        match self.sender.send_message(chat_id, &message).await {
            Ok(sent) => {
                tracing::debug!(message_id = sent.message_id, "telegram delivery confirmed");
                Ok(CallToolResult::success(vec![Content::text(
                    CONFIRMATION_TEXT,
                )]))
            }
            Err(cause) => {
                tracing::warn!(%cause, "telegram send failed");
                Err(rmcp::ErrorData::internal_error(SEND_FAILED_TEXT, None))
            }
        }
    }
}

pub type NotifyRouter = ToolRouter<NotifySvc>;

impl NotifySvc {
    pub fn router() -> NotifyRouter {
        // Wrapper to expose the macro-generated private tool_router
        Self::tool_router()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn svc(base: impl Into<String>, chat_id: Option<i64>) -> NotifySvc {
        NotifySvc {
            sender: TelegramRemote::new(base, "123:abc"),
            chat_id,
        }
    }

    fn params(v: serde_json::Value) -> Parameters<JsonObject> {
        Parameters(v.as_object().unwrap().clone())
    }

    #[tokio::test]
    async fn it_confirms_delivery_with_a_text_block() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST)
                .path("/bot123:abc/sendMessage")
                .json_body(json!({"chat_id": 42, "text": "hi"}));
            then.status(200)
                .json_body(json!({"ok": true, "result": {"message_id": 9}}));
        });

        let out = svc(server.base_url(), Some(42))
            .sent_message(params(json!({"message": "hi"})))
            .await
            .unwrap();
        let text = out.content.as_ref().expect("content")[0]
            .as_text()
            .expect("text content");
        assert_eq!(text.text, CONFIRMATION_TEXT);
    }

    #[tokio::test]
    async fn it_rejects_a_missing_message_with_invalid_params() {
        let server = MockServer::start();
        let err = svc(server.base_url(), Some(42))
            .sent_message(params(json!({})))
            .await
            .unwrap_err();
        assert!(err.message.contains("missing required field: message"));
    }

    #[tokio::test]
    async fn it_rejects_a_non_string_message_with_invalid_params() {
        let server = MockServer::start();
        let err = svc(server.base_url(), Some(42))
            .sent_message(params(json!({"message": 123})))
            .await
            .unwrap_err();
        assert!(err.message.contains("missing required field: message"));
    }

    #[tokio::test]
    async fn it_maps_any_send_failure_to_the_generic_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/bot123:abc/sendMessage");
            then.status(429)
                .json_body(json!({"ok": false, "description": "Too Many Requests: retry after 30"}));
        });

        let err = svc(server.base_url(), Some(42))
            .sent_message(params(json!({"message": "hi"})))
            .await
            .unwrap_err();
        assert_eq!(err.message, SEND_FAILED_TEXT);
    }

    #[tokio::test]
    async fn it_fails_generically_without_a_configured_chat() {
        let server = MockServer::start();
        let err = svc(server.base_url(), None)
            .sent_message(params(json!({"message": "hi"})))
            .await
            .unwrap_err();
        assert_eq!(err.message, SEND_FAILED_TEXT);
    }

    #[test]
    fn router_exposes_exactly_the_send_tool() {
        let router = NotifySvc::router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "sent_message");
    }
}
