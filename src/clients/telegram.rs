use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::infra::http::headers::add_standard_headers;
use crate::infra::runtime::limits::make_http_client;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Thin wrapper over the Bot API `sendMessage` method. Cheap to clone; the
/// underlying reqwest client is shared.
#[derive(Clone)]
pub struct TelegramRemote {
    base: String,
    token: String,
    http: Client,
}

impl TelegramRemote {
    pub fn new(base: impl Into<String>, token: impl Into<String>) -> Self {
        let http = make_http_client();
        Self {
            base: base.into(),
            token: token.into(),
            http,
        }
    }

    /// Single atomic delivery attempt: no retries, no per-call timeout
    /// beyond what the shared client enforces.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<SentMessage, String> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.base.trim_end_matches('/'),
            self.token
        );
        tracing::debug!(chat_id, "telegram.send_message request");
        let start = Instant::now();
        let payload = SendMessageReq { chat_id, text };

        let res: Result<SentMessage, String> = async {
            let (builder, _rid) = add_standard_headers(self.http.post(url), None);
            let resp = builder
                .json(&payload)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            let status = resp.status();
            // The Bot API answers with a JSON envelope on errors too.
            let wire = resp
                .json::<ApiEnvelope>()
                .await
                .map_err(|e| format!("decode response (status {status}): {e}"))?;
            if !wire.ok {
                return Err(wire
                    .description
                    .unwrap_or_else(|| format!("upstream status {status}")));
            }
            Ok(wire.result.unwrap_or_default())
        }
        .await;

        if res.is_err() {
            crate::infra::logging::log_metric("sent_message", "remote_error_total", 1.0);
        }
        let sent = res?;
        let elapsed_ms = start.elapsed().as_millis() as f64;
        crate::infra::logging::log_metric("sent_message", "remote_latency_ms", elapsed_ms);
        Ok(sent)
    }
}

#[derive(Serialize, Clone)]
struct SendMessageReq<'a> {
    chat_id: i64,
    text: &'a str,
}

#[derive(Deserialize)]
struct ApiEnvelope {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    result: Option<SentMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentMessage {
    #[serde(default)]
    pub message_id: i64,
}
