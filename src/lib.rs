//! Canonical identities for LinkedIn URLs, URNs and company web domains.
//!
//! Every lenient operation returns an empty string on failure; the `try_`/`Result`
//! variants expose the reason through the types in [`error`].

pub mod domain;
pub mod error;
pub mod linkedin;
pub mod url_parser;
pub mod utils;

pub use domain::{
    clearbit_url, domain_from_email, domain_from_url, domain_from_url_no_filtering,
    is_public_domain, is_url_shortener_domain, same_domains, subdomain_with_domain_from_url,
    DomainExtractor, ExtractorConfig, HttpRedirectResolver, RedirectResolver,
};
pub use error::{DomainError, NotLinkedInUrl, UrnError};
pub use linkedin::{
    clean_linkedin_url, entity_urn, extract_linkedin_slug, match_linkedin_url,
    match_linkedin_url_by_id_or_handle, sales_company_url_from_urn, try_clean_linkedin_url,
    url_profile_extract, urn_extractor, Urn,
};
pub use url_parser::{extract_host_and_path, generate_url_combinations};
pub use utils::{map_bounded, LimitGroup};
