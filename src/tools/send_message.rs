pub mod tool_router;

use async_trait::async_trait;
use serde_json::json;

use crate::clients::telegram::TelegramRemote;
use crate::domain::{Tool, ToolError, CONFIRMATION_TEXT};

pub const TOOL_NAME: &str = "sent_message";
pub const TOOL_DESCRIPTION: &str = "Send a text message to the configured Telegram chat";

/// The send-message tool: one delivery attempt per call, fixed destination.
#[derive(Clone)]
pub struct SendMessageTool {
    client: TelegramRemote,
    chat_id: Option<i64>,
}

impl SendMessageTool {
    pub fn new(client: TelegramRemote, chat_id: Option<i64>) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl Tool for SendMessageTool {
    fn name(&self) -> &'static str {
        TOOL_NAME
    }
    fn description(&self) -> &'static str {
        TOOL_DESCRIPTION
    }
    fn input_schema(&self) -> serde_json::Value {
        json!({
          "type": "object",
          "properties": { "message": { "type": "string", "description": "Message body to deliver" } },
          "required": ["message"]
        })
    }
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let Some(message) = arguments.get("message").and_then(|v| v.as_str()) else {
            return Err(ToolError::InvalidArgument(
                "missing required field: message".into(),
            ));
        };
        let Some(chat_id) = self.chat_id else {
            tracing::warn!("send failed: chat_id not configured");
            return Err(ToolError::SendFailed);
        };
        match self.client.send_message(chat_id, message).await {
            Ok(sent) => {
                tracing::debug!(message_id = sent.message_id, "telegram delivery confirmed");
                Ok(json!({ "content": [ { "type": "text", "text": CONFIRMATION_TEXT } ] }))
            }
            Err(cause) => {
                // Cause stays in the logs; the caller only sees the generic kind.
                tracing::warn!(%cause, "telegram send failed");
                Err(ToolError::SendFailed)
            }
        }
    }
}
