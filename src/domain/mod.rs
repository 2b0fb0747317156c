use thiserror::Error;

/// Fixed text returned to the caller when a delivery succeeds.
pub const CONFIRMATION_TEXT: &str = "Message sent successfully";

/// Fixed text surfaced to the caller when a delivery fails, whatever the
/// underlying cause. The cause itself is logged at the dispatcher boundary
/// and never propagated.
pub const SEND_FAILED_TEXT: &str = "send message failed";

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {name}")]
    UnknownTool { name: String },
    #[error("{0}")]
    InvalidArgument(String),
    #[error("send message failed")]
    SendFailed,
}

#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> serde_json::Value;
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, ToolError>;
}
