//! Error types for the strict (error-returning) operations.
//!
//! Lenient wrappers such as [`crate::clean_linkedin_url`] or
//! [`crate::DomainExtractor::domain_from_url`] never surface these; they map every
//! failure to an empty-string sentinel instead.

use thiserror::Error;

/// The input did not contain any recognised LinkedIn profile/company/school URL.
///
/// Carries the original input so callers of the strict cleaner can fall back to it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a LinkedIn URL")]
pub struct NotLinkedInUrl {
    raw: String,
}

impl NotLinkedInUrl {
    pub(crate) fn new(raw: &str) -> Self {
        Self { raw: raw.to_owned() }
    }

    /// The unchanged input that failed to match.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn into_raw(self) -> String {
        self.raw
    }
}

/// Errors returned by [`crate::entity_urn`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrnError {
    /// The URN string was empty.
    #[error("empty URN")]
    Empty,

    /// The last colon segment is not a parenthesised 3-tuple.
    #[error("invalid URN format")]
    InvalidFormat,
}

/// Errors produced while deriving a registrable domain or resolving a redirect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The input string was empty.
    #[error("empty URL")]
    EmptyUrl,

    /// The input could not be split into URI components.
    #[error("parse domain from URL: {0}")]
    Parse(String),

    /// Parsing succeeded but produced neither a domain nor a TLD.
    #[error("empty domain and TLD")]
    EmptyDomain,

    /// No eTLD+1 could be derived and the host has no dot to fall back on.
    #[error("parse domain from URL: cannot derive eTLD+1 for domain {0}")]
    Unresolvable(String),

    /// The HEAD request itself failed.
    #[error("failed to get redirection URL for {url}: {reason}")]
    Redirect { url: String, reason: String },

    /// The response was not a redirect or carried no usable `Location` header.
    #[error("no redirection found for {url} with status code: {status}")]
    NoRedirect { url: String, status: u16 },

    /// The redirect lookup did not finish before the deadline.
    #[error("redirect lookup for {0} timed out")]
    Timeout(String),
}

impl DomainError {
    /// True for every failure of the redirect-resolution step.
    ///
    /// These are always recoverable: callers keep the pre-redirect domain.
    pub fn is_redirect_failure(&self) -> bool {
        matches!(
            self,
            DomainError::Redirect { .. } | DomainError::NoRedirect { .. } | DomainError::Timeout(_)
        )
    }
}

impl From<url::ParseError> for DomainError {
    fn from(err: url::ParseError) -> Self {
        DomainError::Parse(err.to_string())
    }
}
