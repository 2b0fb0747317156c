use reqwest::RequestBuilder;

/// Generate a simple request id suitable for logging/correlation.
pub fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("tg-{}-{}", now.as_secs(), now.subsec_nanos())
}

/// Add standard headers to an outgoing request. Returns the updated builder and the request id used.
pub fn add_standard_headers(
    builder: RequestBuilder,
    request_id: Option<String>,
) -> (RequestBuilder, String) {
    let rid = request_id.unwrap_or_else(generate_request_id);
    let b = builder.header("x-request-id", rid.as_str()).header(
        reqwest::header::USER_AGENT,
        format!("telegram-mcp-gateway/{}", env!("CARGO_PKG_VERSION")),
    );
    (b, rid)
}

#[cfg(test)]
mod tests {
    use super::generate_request_id;

    #[test]
    fn request_ids_carry_the_prefix() {
        let rid = generate_request_id();
        assert!(rid.starts_with("tg-"));
    }

    #[test]
    fn consecutive_request_ids_differ() {
        let a = generate_request_id();
        let b = generate_request_id();
        assert_ne!(a, b, "ids must be distinct to be useful for correlation");
    }
}
