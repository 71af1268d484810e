/// A thin wrapper around `reqwest::Client` with a preconfigured base URL and
/// the bearer token the backend expects on every call.
#[derive(Debug)]
pub struct HTTPClient {
    client: reqwest::Client,
    base_url: String,
}

impl HTTPClient {
    /// Builds a client with a 5 second request timeout. `token`, when given,
    /// is attached as a default `Authorization: Bearer` header.
    pub fn new(base_url: &str, token: Option<&str>) -> HTTPClient {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        if let Some(token) = token {
            let bearer = format!("Bearer {token}");
            match reqwest::header::HeaderValue::from_str(&bearer) {
                Ok(value) => {
                    headers.insert(reqwest::header::AUTHORIZATION, value);
                }
                Err(_) => crate::warn!("Ignoring token with non-ASCII characters"),
            }
        }
        HTTPClient {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(5))
                .default_headers(headers)
                .build()
                .unwrap(),
            base_url: String::from(base_url),
        }
    }

    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    pub fn url(&self) -> &str { self.base_url.as_str() }
}
