//! Configuration options for the API client

/// Storage key under which the bearer token is persisted in the browser.
pub const TOKEN_STORAGE_KEY: &str = "leadboard.authToken";

/// Default page size for lead listings.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Configuration options for the API client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Value sent as the `X-Client-Info` header on every request
    pub client_info: String,

    /// Preferred page size for list requests
    pub default_limit: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            client_info: format!("leadboard-client/{}", env!("CARGO_PKG_VERSION")),
            default_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl ClientOptions {
    /// Set the `X-Client-Info` header value
    pub fn with_client_info(mut self, value: &str) -> Self {
        self.client_info = value.to_string();
        self
    }

    /// Set the default page size
    pub fn with_default_limit(mut self, value: u32) -> Self {
        self.default_limit = value;
        self
    }
}
