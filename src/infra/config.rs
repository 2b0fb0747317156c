/// Process-level settings.
pub struct Config {
    pub mode: String, // "stdio" or "server"
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let mode = std::env::var("MODE").unwrap_or_else(|_| "stdio".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);

        Self { mode, port }
    }
}

/// The fixed delivery target: bot token plus one chat id, read once at
/// startup and immutable for the process lifetime.
///
/// Neither value is validated eagerly: an empty token or an unset/garbage
/// `chat_id` still boots the server, and the problem surfaces as a failed
/// send on first use.
#[derive(Clone, Debug)]
pub struct Destination {
    pub token: String,
    pub chat_id: Option<i64>,
    pub api_base: String,
}

impl Destination {
    pub fn from_env() -> Self {
        let token = std::env::var("token").unwrap_or_default();
        let chat_id = std::env::var("chat_id")
            .ok()
            .and_then(|s| s.trim().parse::<i64>().ok());
        let api_base = std::env::var("TELEGRAM_API_BASE_URL")
            .unwrap_or_else(|_| crate::clients::telegram::DEFAULT_API_BASE.into());

        Self { token, chat_id, api_base }
    }
}
