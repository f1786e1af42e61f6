//! Registrable-domain extraction with shortener resolution and public-domain filtering.

pub mod config;
pub mod extractor;
pub mod filters;
pub mod redirect;

use std::time::Duration;

use once_cell::sync::Lazy;
use tracing::{debug, error, info};
use url::Url;

use crate::error::DomainError;
use crate::url_parser::normalizer::has_web_scheme;

pub use config::ExtractorConfig;
pub use extractor::{
    clearbit_url, domain_from_email, domain_from_url_no_filtering, host_parts,
    subdomain_with_domain_from_url, HostParts,
};
pub use filters::{is_public_domain, is_url_shortener_domain, known_domain};
pub use redirect::{HttpRedirectResolver, RedirectResolver};

static DEFAULT_EXTRACTOR: Lazy<DomainExtractor> = Lazy::new(DomainExtractor::default);

/// Filtered domain extraction, following link shorteners through `R`.
#[derive(Debug, Clone)]
pub struct DomainExtractor<R = HttpRedirectResolver> {
    resolver: R,
    redirect_timeout: Duration,
}

impl Default for DomainExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl DomainExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let redirect_timeout = config.redirect_timeout;
        Self {
            resolver: HttpRedirectResolver::new(config),
            redirect_timeout,
        }
    }
}

impl<R: RedirectResolver> DomainExtractor<R> {
    pub fn with_resolver(resolver: R, redirect_timeout: Duration) -> Self {
        Self {
            resolver,
            redirect_timeout,
        }
    }

    pub fn redirect_timeout(&self) -> Duration {
        self.redirect_timeout
    }

    /// Company domain of `s`, or an empty string.
    ///
    /// Shortener links are followed one hop; social networks and website builders
    /// give an empty string.
    pub async fn domain_from_url(&self, s: &str) -> String {
        self.domain_from_url_within(s, self.redirect_timeout).await
    }

    /// [`Self::domain_from_url`] with a caller-chosen deadline for the redirect lookup.
    pub async fn domain_from_url_within(&self, s: &str, deadline: Duration) -> String {
        if s.trim().is_empty() {
            return String::new();
        }

        let mut domain = match domain_from_url_no_filtering(s) {
            Ok(domain) => domain,
            Err(e) => {
                if e != DomainError::EmptyUrl {
                    info!("Domain extraction failed for {}: {}", s, e);
                }
                return String::new();
            }
        };

        if is_url_shortener_domain(&domain) {
            match self.resolve_domain(s, deadline).await {
                Ok(redirected) => domain = redirected,
                Err(e) => error!("Could not resolve shortened URL {}: {}", s, e),
            }
        }

        if is_public_domain(&domain) {
            debug!("Dropping public domain {}", domain);
            return String::new();
        }

        match known_domain(&domain) {
            Some(known) => known.to_string(),
            None => domain,
        }
    }

    /// Domain of the page `s` redirects to.
    pub async fn redirected_domain_from_domain(&self, s: &str) -> Result<String, DomainError> {
        let domain = domain_from_url_no_filtering(s)?;
        self.resolve_domain(&domain, self.redirect_timeout).await
    }

    /// True when the CRM value names the same company domain as the LinkedIn one.
    pub async fn same_domains(&self, linkedin_domain: &str, crm_domain: &str) -> bool {
        if linkedin_domain.is_empty() || crm_domain.is_empty() {
            return false;
        }

        let extracted = self.domain_from_url(crm_domain).await;
        if extracted.is_empty() {
            return crm_domain.eq_ignore_ascii_case(linkedin_domain);
        }
        extracted.eq_ignore_ascii_case(linkedin_domain)
    }

    async fn resolve_domain(&self, s: &str, deadline: Duration) -> Result<String, DomainError> {
        let request_url = if has_web_scheme(s) {
            s.to_string()
        } else {
            format!("https://{s}")
        };

        let location = tokio::time::timeout(deadline, self.resolver.first_hop(&request_url))
            .await
            .map_err(|_| DomainError::Timeout(request_url.clone()))??;
        debug!("{} redirects to {}", request_url, location);

        let target = match Url::parse(&request_url).and_then(|base| base.join(&location)) {
            Ok(joined) => joined.to_string(),
            Err(_) => location,
        };
        domain_from_url_no_filtering(&target)
    }
}

/// [`DomainExtractor::domain_from_url`] on a shared default extractor.
pub async fn domain_from_url(s: &str) -> String {
    DEFAULT_EXTRACTOR.domain_from_url(s).await
}

/// [`DomainExtractor::same_domains`] on a shared default extractor.
pub async fn same_domains(linkedin_domain: &str, crm_domain: &str) -> bool {
    DEFAULT_EXTRACTOR.same_domains(linkedin_domain, crm_domain).await
}
