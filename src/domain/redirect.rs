use std::future::Future;

use reqwest::{header::LOCATION, redirect::Policy, Client};
use tracing::{debug, error, trace};

use super::config::ExtractorConfig;
use crate::error::DomainError;

/// Looks up where a URL redirects to, without following the redirect.
pub trait RedirectResolver: Send + Sync {
    /// Returns the raw `Location` of the first 3xx response for `url`.
    fn first_hop(&self, url: &str) -> impl Future<Output = Result<String, DomainError>> + Send;
}

/// Resolves redirects with a single `HEAD` request.
#[derive(Debug, Clone, Default)]
pub struct HttpRedirectResolver {
    config: ExtractorConfig,
}

impl HttpRedirectResolver {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    fn build_client(&self, url: &str) -> Result<Client, DomainError> {
        Client::builder()
            .redirect(Policy::none())
            .timeout(self.config.redirect_timeout)
            .connect_timeout(self.config.connect_timeout)
            .user_agent(self.config.user_agent.as_str())
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                DomainError::Redirect {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            })
    }
}

impl RedirectResolver for HttpRedirectResolver {
    fn first_hop(&self, url: &str) -> impl Future<Output = Result<String, DomainError>> + Send {
        let url = url.to_string();
        let client = self.build_client(&url);

        async move {
            let client = client?;
            debug!("Sending HEAD request to {}", url);
            let resp = client.head(&url).send().await.map_err(|e| DomainError::Redirect {
                url: url.clone(),
                reason: e.to_string(),
            })?;

            let status = resp.status();
            trace!("Response status for {}: {}", url, status);
            if !status.is_redirection() {
                return Err(DomainError::NoRedirect {
                    url,
                    status: status.as_u16(),
                });
            }

            match resp.headers().get(LOCATION).and_then(|value| value.to_str().ok()) {
                Some(location) if !location.is_empty() => Ok(location.to_string()),
                _ => Err(DomainError::NoRedirect {
                    url,
                    status: status.as_u16(),
                }),
            }
        }
    }
}
