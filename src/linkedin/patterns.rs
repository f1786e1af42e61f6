use once_cell::sync::Lazy;
use regex::Regex;

/// A profile/company/school URL, scheme and one subdomain label optional.
pub static LINKEDIN_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:https?://)?(?:[A-Za-z0-9_]+\.)?linkedin\.com/(?:pub|in|profile|company|school)/[^/?#\s]+")
        .unwrap()
});

/// Captures the entity type (1) and the raw handle (2).
pub static LINKEDIN_TYPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"linkedin\.com/(pub|in|profile|company|school)/([^/ ?#]+)").unwrap()
});

/// A bare handle: letters, digits and hyphen-separated runs.
pub static HANDLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}0-9-]+(?:-[\p{L}0-9]+)*$").unwrap()
});

/// First parenthesised group of a URN segment, non-greedy.
pub static URN_TUPLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\((.*?)\)").unwrap()
});
