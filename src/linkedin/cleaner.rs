use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use tracing::{debug, trace, warn};

use super::patterns::{HANDLE_REGEX, LINKEDIN_TYPE_REGEX, LINKEDIN_URL_REGEX};
use crate::error::NotLinkedInUrl;
use crate::url_parser::extract_host_and_path;
use crate::url_parser::uri::percent_decode;

/// Returns the leftmost LinkedIn profile/company/school URL found in `raw`, cut after
/// the handle (query, fragment and extra path segments are dropped).
///
/// With `escape_handle` the handle is decoded and then re-escaped as a path segment,
/// so already-escaped and raw UTF-8 handles end up identical and a second pass is a
/// no-op. On failure the error carries `raw` unchanged.
pub fn try_clean_linkedin_url(raw: &str, escape_handle: bool) -> Result<String, NotLinkedInUrl> {
    let clean = match LINKEDIN_URL_REGEX.find(raw) {
        Some(m) => m.as_str(),
        None => {
            trace!("No LinkedIn URL in {:?}", raw);
            return Err(NotLinkedInUrl::new(raw));
        }
    };

    if !escape_handle {
        return Ok(clean.to_string());
    }

    // The pattern always contains `/<type>/` before the handle
    let (base, handle) = clean.rsplit_once('/').unwrap_or(("", clean));
    let handle = match percent_decode(handle) {
        Ok(decoded) => escape_path_segment(&decoded),
        Err(e) => {
            debug!("Keeping handle {:?} unescaped: {}", handle, e);
            handle.to_string()
        }
    };

    Ok(format!("{base}/{handle}"))
}

/// Lenient form of [`try_clean_linkedin_url`]: empty string when nothing matches.
pub fn clean_linkedin_url(raw: &str) -> String {
    try_clean_linkedin_url(raw, false).unwrap_or_default()
}

pub fn is_linkedin_url(raw: &str) -> bool {
    !raw.is_empty() && LINKEDIN_URL_REGEX.is_match(raw)
}

/// Path-segment set: everything but unreserved characters and `$&+:=@` is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

fn escape_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Query-style unescaping (`+` is a space); empty string on a malformed escape or a
/// non UTF-8 result.
fn query_unescape(s: &str) -> String {
    match percent_decode(&s.replace('+', " ")) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!("Could not decode handle {:?}: {}", s, e);
            String::new()
        }
    }
}

fn handle_from_url(s: &str) -> String {
    match LINKEDIN_TYPE_REGEX.captures(s).and_then(|c| c.get(2)) {
        Some(handle) => query_unescape(handle.as_str()),
        None => String::new(),
    }
}

/// Handle of a LinkedIn URL, or the input itself when it already is a bare handle.
pub fn url_profile_extract(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    if HANDLE_REGEX.is_match(s) {
        return s.to_string();
    }
    handle_from_url(s)
}

/// Like [`url_profile_extract`] but tolerant of what people paste into CRM fields:
/// fragments, a trailing slash, and free text after the URL (`abc-xyz (Company)`).
pub fn extract_linkedin_slug(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    let s = s.split('#').next().unwrap_or("");
    let s = s.strip_suffix('/').unwrap_or(s);

    if HANDLE_REGEX.is_match(s) {
        return s.to_string();
    }

    let token = s.split_whitespace().next().unwrap_or("");
    handle_from_url(token)
}

/// True when both URLs are the same LinkedIn URL, ignoring one trailing slash.
pub fn match_linkedin_url(url1: &str, url2: &str) -> bool {
    let url1 = url1.strip_suffix('/').unwrap_or(url1);
    let url2 = url2.strip_suffix('/').unwrap_or(url2);
    url1 == url2 && !clean_linkedin_url(url1).is_empty()
}

/// True when `s` is a linkedin.com URL containing `id_or_handle` as a whole word
/// anywhere after the host.
///
/// This is a word-boundary search, not a handle comparison: a value that appears in
/// the query string also matches.
pub fn match_linkedin_url_by_id_or_handle(s: &str, id_or_handle: &str) -> bool {
    if id_or_handle.is_empty() {
        return false;
    }

    let pattern = format!(
        r"^(?:https?://)?(?:www\.)?linkedin\.com.*?\b{}\b",
        regex::escape(id_or_handle)
    );
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(s),
        Err(e) => {
            warn!("Invalid handle pattern for {:?}: {}", id_or_handle, e);
            false
        }
    }
}

/// Profile link for a handle, member id or Sales Navigator id.
pub fn contact_profile_url(id: &str) -> String {
    format!("https://linkedin.com/in/{id}")
}

/// Organization link for an id or handle; LinkedIn redirects schools from `/company/`.
pub fn organization_profile_url(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    format!("https://linkedin.com/company/{id}")
}

/// Sales Navigator id from a people URL such as
/// `https://www.linkedin.com/sales/people/ACwAAAB0jjIB,OUT_OF_NETWORK,2N7m`.
pub fn extract_sales_nav_id_from_url(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let before_comma = s.split(',').next().unwrap_or("");
    before_comma.rsplit('/').next().unwrap_or("").to_string()
}

/// Anything that stores a LinkedIn URL under a field key.
pub trait LinkedinUrlGetter {
    fn linkedin_url(&self, key: &str) -> &str;
}

/// Keeps the entities whose LinkedIn URL is either missing/unrecognised or points to
/// the same resource as `linkedin_url`.
///
/// When `linkedin_url` itself is not a LinkedIn URL, nothing is filtered.
pub fn retain_matching_linkedin_url<T: LinkedinUrlGetter>(
    entities: Vec<T>,
    key: &str,
    linkedin_url: &str,
) -> Vec<T> {
    let reference = clean_linkedin_url(linkedin_url);
    if reference.is_empty() {
        return entities;
    }
    let reference_key = extract_host_and_path(&reference);

    entities
        .into_iter()
        .filter(|entity| {
            let cleaned = clean_linkedin_url(entity.linkedin_url(key));
            cleaned.is_empty() || extract_host_and_path(&cleaned) == reference_key
        })
        .collect()
}
