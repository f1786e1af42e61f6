use std::borrow::Cow;

use thiserror::Error;
use tracing::trace;

use crate::error::DomainError;

/// Reasons a raw string could not be split into URI components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    #[error("missing protocol scheme")]
    MissingScheme,

    #[error("first path segment in URL cannot contain colon")]
    ColonInFirstSegment,

    #[error("invalid control character in URL")]
    ControlCharacter,

    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),

    #[error("invalid character {0:?} in host name")]
    InvalidHostCharacter(char),

    #[error("invalid port {0:?} after host")]
    InvalidPort(String),

    #[error("missing ']' in host")]
    UnclosedBracket,
}

impl From<UriError> for DomainError {
    fn from(err: UriError) -> Self {
        DomainError::Parse(err.to_string())
    }
}

/// Components of a reference split the generic (RFC 3986) way.
///
/// Unlike [`url::Url`] this keeps the host exactly as written (no lower-casing, no IDNA)
/// and accepts scheme-less references, where everything before `?`/`#` is path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriParts<'a> {
    pub scheme: Option<&'a str>,
    pub userinfo: Option<&'a str>,
    /// Authority host including any `:port`, empty when there is no authority.
    pub host: &'a str,
    /// Percent-decoded path.
    pub path: String,
    pub raw_path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
    /// Scheme present but no `/` after it, e.g. `mailto:someone`.
    pub opaque: Option<&'a str>,
}

impl<'a> UriParts<'a> {
    /// Host without port and without IPv6 brackets.
    pub fn hostname(&self) -> &'a str {
        let host = self.host;
        if let Some(stripped) = host.strip_prefix('[') {
            return match stripped.find(']') {
                Some(end) => &stripped[..end],
                None => stripped,
            };
        }
        match host.rfind(':') {
            Some(idx) => &host[..idx],
            None => host,
        }
    }

    /// Port digits after the host, if any.
    pub fn port(&self) -> Option<&'a str> {
        let after_bracket = match self.host.rfind(']') {
            Some(idx) => &self.host[idx + 1..],
            None => self.host,
        };
        after_bracket
            .rfind(':')
            .map(|idx| &after_bracket[idx + 1..])
            .filter(|port| !port.is_empty())
    }
}

/// Splits `input` into its components.
pub fn split(input: &str) -> Result<UriParts<'_>, UriError> {
    if input.bytes().any(|b| b < 0x20 || b == 0x7f) {
        return Err(UriError::ControlCharacter);
    }

    let (rest, fragment) = match input.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (input, None),
    };

    let (scheme, rest) = split_scheme(rest)?;

    let (rest, query) = match rest.split_once('?') {
        Some((rest, query)) => (rest, Some(query)),
        None => (rest, None),
    };

    if scheme.is_some() && !rest.starts_with('/') {
        trace!("Opaque reference: {}", rest);
        return Ok(UriParts {
            scheme,
            userinfo: None,
            host: "",
            path: String::new(),
            raw_path: "",
            query,
            fragment,
            opaque: Some(rest),
        });
    }

    if scheme.is_none() {
        let first_segment = rest.split('/').next().unwrap_or("");
        if first_segment.contains(':') {
            return Err(UriError::ColonInFirstSegment);
        }
    }

    let mut userinfo = None;
    let mut host = "";
    let mut raw_path = rest;
    if (scheme.is_some() || !rest.starts_with("///")) && rest.starts_with("//") {
        let after = &rest[2..];
        let (authority, path) = match after.find('/') {
            Some(idx) => (&after[..idx], &after[idx..]),
            None => (after, ""),
        };
        match authority.rfind('@') {
            Some(idx) => {
                userinfo = Some(&authority[..idx]);
                host = &authority[idx + 1..];
            }
            None => host = authority,
        }
        validate_host(host)?;
        raw_path = path;
    }

    let path = percent_decode(raw_path)?;

    Ok(UriParts {
        scheme,
        userinfo,
        host,
        path,
        raw_path,
        query,
        fragment,
        opaque: None,
    })
}

fn split_scheme(input: &str) -> Result<(Option<&str>, &str), UriError> {
    for (i, c) in input.char_indices() {
        match c {
            'a'..='z' | 'A'..='Z' => {}
            '0'..='9' | '+' | '-' | '.' => {
                if i == 0 {
                    return Ok((None, input));
                }
            }
            ':' => {
                if i == 0 {
                    return Err(UriError::MissingScheme);
                }
                return Ok((Some(&input[..i]), &input[i + 1..]));
            }
            _ => return Ok((None, input)),
        }
    }
    Ok((None, input))
}

fn validate_host(host: &str) -> Result<(), UriError> {
    let (name, port) = if host.starts_with('[') {
        let end = host.find(']').ok_or(UriError::UnclosedBracket)?;
        (&host[..=end], &host[end + 1..])
    } else {
        match host.rfind(':') {
            Some(idx) => (&host[..idx], &host[idx..]),
            None => (host, ""),
        }
    };

    if !port.is_empty() {
        let digits = port.strip_prefix(':').ok_or_else(|| UriError::InvalidPort(port.to_string()))?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UriError::InvalidPort(port.to_string()));
        }
    }

    for c in name.chars() {
        let allowed = !c.is_ascii()
            || c.is_ascii_alphanumeric()
            || "-._~!$&'()*+,;=:[]<>\"%".contains(c);
        if !allowed {
            return Err(UriError::InvalidHostCharacter(c));
        }
    }
    Ok(())
}

/// Decodes `%XX` escapes, rejecting malformed ones and non UTF-8 results.
pub fn percent_decode(input: &str) -> Result<String, UriError> {
    check_escapes(input)?;
    urlencoding::decode(input)
        .map(Cow::into_owned)
        .map_err(|_| UriError::InvalidEscape(input.to_string()))
}

/// Every `%` must start a two hex digit escape.
fn check_escapes(input: &str) -> Result<(), UriError> {
    let bytes = input.as_bytes();
    for (i, _) in input.match_indices('%') {
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            let end = (i + 3).min(bytes.len());
            return Err(UriError::InvalidEscape(String::from_utf8_lossy(&bytes[i..end]).into_owned()));
        }
    }
    Ok(())
}
