use std::time::Duration;

const REDIRECT_TIMEOUT: u64 = 10; // seconds
const CONNECT_TIMEOUT: u64 = 5; // seconds
const USER_AGENT: &str = concat!("linkid/", env!("CARGO_PKG_VERSION"));

/// Settings for the network side of domain extraction.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Upper bound on the whole redirect lookup, request included.
    pub redirect_timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deadline for resolving a shortener's first redirect hop
    pub fn with_redirect_timeout(mut self, timeout: Duration) -> Self {
        self.redirect_timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            redirect_timeout: Duration::from_secs(REDIRECT_TIMEOUT),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT),
            user_agent: USER_AGENT.to_string(),
        }
    }
}
