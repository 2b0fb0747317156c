use std::time::Duration;

/// Build a reqwest client with sane defaults (connect + request timeouts).
/// This is the only place outbound timeouts are set; callers never override
/// them per request.
pub fn make_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(2))
        .timeout(Duration::from_secs(10))
        .build()
        .expect("reqwest client")
}

#[cfg(test)]
mod tests {
    #[test]
    fn it_builds_a_client() {
        let _ = super::make_http_client();
    }
}
