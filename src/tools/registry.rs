use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::telegram::TelegramRemote;
use crate::domain::{Tool, ToolError};
use crate::tools::send_message::SendMessageTool;

#[derive(Clone)]
pub struct ToolRegistry {
    by_name: Arc<HashMap<&'static str, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    pub fn with_tools<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = Arc<T>>,
        T: Tool + 'static,
    {
        let mut map: HashMap<&'static str, Arc<dyn Tool>> = HashMap::new();
        for t in iter.into_iter() {
            map.insert(t.name(), t);
        }
        Self { by_name: Arc::new(map) }
    }

    /// Pure discovery: always the same descriptors, no failure modes.
    pub fn list(&self) -> Vec<ToolMeta> {
        self.by_name
            .values()
            .map(|t| ToolMeta {
                name: t.name(),
                description: t.description(),
                input_schema: t.input_schema(),
            })
            .collect()
    }

    pub async fn call(
        &self,
        name: &str,
        args: &serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let t = self
            .by_name
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool { name: name.to_string() })?;
        t.call(args).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

/// Build the one-tool registry around the shared Telegram client.
pub fn build_registry(sender: TelegramRemote, chat_id: Option<i64>) -> ToolRegistry {
    ToolRegistry::with_tools([Arc::new(SendMessageTool::new(sender, chat_id))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> ToolRegistry {
        build_registry(TelegramRemote::new("http://localhost:0", "t"), Some(1))
    }

    #[test]
    fn it_lists_exactly_the_send_tool() {
        let metas = registry().list();
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].name, "sent_message");
        assert_eq!(metas[0].input_schema["required"], json!(["message"]));
        assert_eq!(
            metas[0].input_schema["properties"]["message"]["type"],
            "string"
        );
    }

    #[test]
    fn listing_is_stable_across_queries() {
        let reg = registry();
        assert_eq!(reg.list(), reg.list());
    }

    #[tokio::test]
    async fn unknown_tool_errors_carry_the_name() {
        let err = registry().call("unknown_tool", &json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool { .. }));
        assert_eq!(err.to_string(), "unknown tool: unknown_tool");
    }

    #[tokio::test]
    async fn call_dispatches_to_the_registered_tool() {
        // No chat reachable at localhost:0, but validation runs first.
        let err = registry().call("sent_message", &json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument(_)));
    }
}
