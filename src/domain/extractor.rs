use psl::{List, Psl};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::DomainError;
use crate::url_parser::normalizer::has_web_scheme;
use crate::url_parser::uri::{self, UriParts};

const CLEARBIT_LOGO_URL: &str = "https://logo.clearbit.com/";

/// A hostname split along the Public Suffix List.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HostParts {
    /// Labels left of the registrable domain, joined with dots.
    pub subdomain: String,
    /// The single label right before the public suffix.
    pub domain: String,
    /// The public suffix, possibly multi-label (`co.uk`).
    pub tld: String,
}

impl HostParts {
    fn from_uri(parts: &UriParts<'_>) -> Result<Self, DomainError> {
        let hostname = parts.hostname();
        if hostname.is_empty() {
            return Err(DomainError::EmptyDomain);
        }

        let registrable = List
            .domain(hostname.as_bytes())
            .ok_or_else(|| DomainError::Unresolvable(hostname.to_string()))?;
        let registrable_str = String::from_utf8_lossy(registrable.as_bytes()).into_owned();
        let tld = List
            .suffix(hostname.as_bytes())
            .map(|suffix| String::from_utf8_lossy(suffix.as_bytes()).into_owned())
            .unwrap_or_default();

        let domain = registrable_str
            .strip_suffix(tld.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or_default()
            .to_string();
        let subdomain = hostname
            .strip_suffix(registrable_str.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or_default()
            .to_string();

        trace!("Split {} into {:?} / {:?} / {:?}", hostname, subdomain, domain, tld);
        Ok(Self { subdomain, domain, tld })
    }

    /// `domain.tld`
    pub fn registrable(&self) -> String {
        format!("{}.{}", self.domain, self.tld)
    }
}

/// Lower-cases `s` and gives it an authority marker when it has no web scheme.
fn normalize_for_parsing(s: &str) -> String {
    let lowered = s.to_lowercase();
    if has_web_scheme(&lowered) {
        lowered
    } else {
        format!("//{lowered}")
    }
}

/// Splits the host of `s` (scheme optional) along the Public Suffix List.
pub fn host_parts(s: &str) -> Result<HostParts, DomainError> {
    let normalized = normalize_for_parsing(s);
    let parts = uri::split(&normalized)?;
    HostParts::from_uri(&parts)
}

/// Registrable domain (eTLD+1) of a URL or bare host, without any filtering.
///
/// When the PSL cannot name a registrable domain, for instance because the host is a
/// public suffix itself (`co.uk`, `uk.com`), the authority host is returned as long as
/// it contains a dot.
pub fn domain_from_url_no_filtering(s: &str) -> Result<String, DomainError> {
    if s.is_empty() {
        return Err(DomainError::EmptyUrl);
    }

    let normalized = normalize_for_parsing(s);
    let parts = uri::split(&normalized)?;
    match HostParts::from_uri(&parts) {
        Ok(host) if host.domain.is_empty() && host.tld.is_empty() => Err(DomainError::EmptyDomain),
        Ok(host) => Ok(host.registrable()),
        Err(DomainError::Unresolvable(_)) if parts.host.contains('.') => {
            debug!("No eTLD+1 for {}, using the host as is", parts.host);
            Ok(parts.host.to_string())
        }
        Err(e) => Err(e),
    }
}

/// Like [`domain_from_url_no_filtering`] but keeps a subdomain other than `www`.
pub fn subdomain_with_domain_from_url(s: &str) -> Result<String, DomainError> {
    let host = host_parts(s)?;
    if host.domain.is_empty() && host.tld.is_empty() {
        return Err(DomainError::EmptyDomain);
    }

    if host.subdomain.is_empty() || host.subdomain == "www" {
        return Ok(host.registrable());
    }
    Ok(format!("{}.{}", host.subdomain, host.registrable()))
}

/// Part after the `@` of an address with exactly one `@`.
pub fn domain_from_email(email: &str) -> String {
    match email.split_once('@') {
        Some((_, domain)) if !domain.contains('@') => domain.to_string(),
        _ => String::new(),
    }
}

/// Clearbit logo URL for the domain of `s`, empty when no domain can be derived.
pub fn clearbit_url(s: &str) -> String {
    match domain_from_url_no_filtering(s) {
        Ok(domain) if !domain.is_empty() => format!("{CLEARBIT_LOGO_URL}{domain}"),
        _ => String::new(),
    }
}
