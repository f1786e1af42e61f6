use tracing::{debug, trace};

use super::uri::{self, UriParts};

const WWW_PREFIX: &str = "www.";

/// Removes a leading `www.` (any case) and keeps the rest of the host untouched.
pub(crate) fn strip_www(host: &str) -> &str {
    match host.get(..WWW_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(WWW_PREFIX) => &host[WWW_PREFIX.len()..],
        _ => host,
    }
}

pub(crate) fn has_web_scheme(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Returns the canonical key of a URL: host without `www.` followed by the path,
/// with no scheme, query, fragment or trailing `/`.
///
/// Strings that cannot be parsed come back with only the trailing `/` removed.
/// A reference without a scheme has no authority, so
/// `www.linkedin.com/company/surfe/` keeps its `www.`.
pub fn extract_host_and_path(full_url: &str) -> String {
    let trimmed = full_url.strip_suffix('/').unwrap_or(full_url);
    match uri::split(trimmed) {
        Ok(parts) => {
            let key = format!("{}{}", strip_www(parts.host), parts.path);
            trace!("Canonical key for {}: {}", full_url, key);
            key
        }
        Err(e) => {
            debug!("Could not parse {:?} ({}), keeping it as is", trimmed, e);
            trimmed.to_string()
        }
    }
}

/// Lists the eight scheme/`www.`/trailing-slash spellings of the same resource.
///
/// The order is fixed: https+www+slash, http+www+slash, https+slash, http+slash,
/// https+www, http+www, https, http. Empty input gives an empty list. The input is
/// not checked to be a URL.
pub fn generate_url_combinations(full_url: &str) -> Vec<String> {
    if full_url.is_empty() {
        return Vec::new();
    }

    let host_and_path = extract_host_and_path(full_url);
    let mut combinations = Vec::with_capacity(8);
    for slash in ["/", ""] {
        for www in [WWW_PREFIX, ""] {
            for scheme in ["https://", "http://"] {
                combinations.push(format!("{scheme}{www}{host_and_path}{slash}"));
            }
        }
    }
    combinations
}

/// Hostname of a URL (no port) with every `www.` removed, so `a.www.b.com` gives
/// `a.b.com`.
pub fn url_hostname_extractor(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let with_authority = if has_web_scheme(s) { s.to_string() } else { format!("//{s}") };
    match uri::split(&with_authority) {
        Ok(parts) => parts.hostname().replace("www.", ""),
        Err(e) => {
            debug!("Hostname extraction failed for {}: {}", s, e);
            String::new()
        }
    }
}

/// Drops the query string and one trailing `/` of the path, keeping the fragment.
pub fn remove_query_params(s: &str) -> String {
    match uri::split(s) {
        Ok(parts) => reassemble_without_query(&parts),
        Err(_) => s.to_string(),
    }
}

fn reassemble_without_query(parts: &UriParts<'_>) -> String {
    let mut out = String::new();
    if let Some(scheme) = parts.scheme {
        out.push_str(scheme);
        out.push(':');
    }
    if let Some(opaque) = parts.opaque {
        out.push_str(opaque);
    } else {
        if parts.scheme.is_some() || !parts.host.is_empty() {
            out.push_str("//");
            if let Some(userinfo) = parts.userinfo {
                out.push_str(userinfo);
                out.push('@');
            }
            out.push_str(parts.host);
        }
        out.push_str(parts.raw_path.strip_suffix('/').unwrap_or(parts.raw_path));
    }
    if let Some(fragment) = parts.fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// Hostname of a full URL, or the input itself when it has none.
pub fn format_domain_url(domain_url: &str) -> String {
    match uri::split(domain_url) {
        Ok(parts) if !parts.hostname().is_empty() => parts.hostname().to_string(),
        _ => domain_url.to_string(),
    }
}

/// First label of the hostname once `www.` is gone, e.g. `surfe` for
/// `https://www.surfe.com/some-path`.
pub fn domain_name_without_tld(raw_url: &str) -> String {
    let with_scheme = if raw_url.starts_with("http") {
        raw_url.to_string()
    } else {
        format!("http://{raw_url}")
    };

    let parts = match uri::split(&with_scheme) {
        Ok(parts) => parts,
        Err(_) => return String::new(),
    };

    let host = strip_www(parts.hostname());
    match host.split_once('.') {
        Some((name, _)) => name.to_string(),
        None => host.to_string(),
    }
}
