//! Structural URL handling: the lenient URI splitter and the canonical-key
//! normalizers built on it.

pub mod normalizer;
pub mod uri;

mod tests;

pub use normalizer::{
    domain_name_without_tld, extract_host_and_path, format_domain_url, generate_url_combinations,
    remove_query_params, url_hostname_extractor,
};
pub use uri::{UriError, UriParts};
