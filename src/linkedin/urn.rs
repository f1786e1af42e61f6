use serde::Serialize;
use tracing::trace;

use super::patterns::URN_TUPLE_REGEX;
use crate::error::UrnError;

const SALES_PEOPLE_ROOT: &str = "https://www.linkedin.com/sales/people";
const SALES_COMPANY_ROOT: &str = "https://www.linkedin.com/sales/company";

/// Components of a tuple URN such as
/// `urn:li:fs_salesProfile:(ACwAAAKWZe8B,NAME_SEARCH,xqt8)`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Urn {
    pub profile_id: String,
    pub auth_type: String,
    pub auth_token: String,
}

fn last_segment(urn: &str) -> &str {
    urn.rsplit(':').next().unwrap_or("")
}

fn tuple_content(segment: &str) -> Option<&str> {
    URN_TUPLE_REGEX
        .captures(segment)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Identifier at the end of a URN.
///
/// `urn:li:member:22719531` gives `22719531`, and for a tuple URN the trimmed first
/// component of the parenthesised group. Input without `:` is returned as is.
pub fn urn_extractor(urn: &str) -> String {
    let segment = last_segment(urn);
    match tuple_content(segment) {
        Some(content) => content.split(',').next().unwrap_or("").trim().to_string(),
        None => segment.to_string(),
    }
}

/// Parses a three-component tuple URN.
///
/// Type and token are trimmed; the profile id is returned exactly as written.
pub fn entity_urn(urn: &str) -> Result<Urn, UrnError> {
    if urn.is_empty() {
        return Err(UrnError::Empty);
    }

    let content = tuple_content(last_segment(urn)).ok_or(UrnError::InvalidFormat)?;
    let components: Vec<&str> = content.split(',').collect();
    let [profile_id, auth_type, auth_token] = components[..] else {
        trace!("URN {:?} has {} components", urn, components.len());
        return Err(UrnError::InvalidFormat);
    };

    if [profile_id, auth_type, auth_token].iter().any(|c| c.trim().is_empty()) {
        return Err(UrnError::InvalidFormat);
    }

    Ok(Urn {
        profile_id: profile_id.to_string(),
        auth_type: auth_type.trim().to_string(),
        auth_token: auth_token.trim().to_string(),
    })
}

/// Fourth segment of a four-segment URN (`34307789` in `urn:li:fs_salesCompany:34307789`).
pub fn extract_sales_profile_id_from_urn(urn: &str) -> String {
    let segments: Vec<&str> = urn.split(':').collect();
    match segments[..] {
        [_, _, _, id] => id.to_string(),
        _ => String::new(),
    }
}

pub fn sales_company_url_from_urn(urn: &str) -> String {
    let id = extract_sales_profile_id_from_urn(urn);
    if id.is_empty() {
        return String::new();
    }
    format!("{SALES_COMPANY_ROOT}/{id}")
}

pub fn sales_profile_url_from_urn(urn: &str) -> String {
    match entity_urn(urn) {
        Ok(parsed) => format!("{SALES_PEOPLE_ROOT}/{}", parsed.profile_id),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urn_extractor() {
        let cases = [
            ("urn:li:fs_normalized_company:13205888", "13205888"),
            ("urn:li:member:22719531", "22719531"),
            ("", ""),
            ("non-empty string without colon", "non-empty string without colon"),
            ("urn:li:fs_salesProfile:(ACwAAAJlc6wBYdHGFmVJDHu,NAME_SEARCH,ij9X)", "ACwAAAJlc6wBYdHGFmVJDHu"),
            ("urn:li:fs_salesProfile:( ACwAAAJlc6wBYdHGFmVJDHu , NAME_SEARCH , ij9X )", "ACwAAAJlc6wBYdHGFmVJDHu"),
            ("urn:li:fs_salesProfile:(ACwAAAJlc6wBYdHGFmVJDHu)", "ACwAAAJlc6wBYdHGFmVJDHu"),
            ("urn:li:fs_salesProfile:()", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(urn_extractor(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_entity_urn() {
        let urn = entity_urn("urn:li:fs_salesProfile:(ACwAAAKWZe8BZ8gXVKS6ePAs8I4GWmjW4Tjm-7w,NAME_SEARCH,xqt8)").unwrap();
        assert_eq!(
            urn,
            Urn {
                profile_id: "ACwAAAKWZe8BZ8gXVKS6ePAs8I4GWmjW4Tjm-7w".into(),
                auth_type: "NAME_SEARCH".into(),
                auth_token: "xqt8".into(),
            }
        );
    }

    #[test]
    fn test_entity_urn_errors() {
        assert_eq!(entity_urn(""), Err(UrnError::Empty));
        assert_eq!(UrnError::Empty.to_string(), "empty URN");

        let invalid = [
            "invalid-urn",
            "urn:li:fs_salesProfile:ACwAAAKWZe8BZ8gXVKS6ePAs,NAME_SEARCH,xqt8",
            "urn:li:fs_salesProfile:(ACwAAAKWZe8BZ8gXVKS6ePAs)",
            "urn:li:fs_salesProfile:(part1,part2,part3,part4)",
            "urn:li:fs_salesProfile:()",
            "urn:li:fs_salesProfile:(ACwAAAKWZe8BZ8gXVKS6ePAs,NAME_SEARCH,xqt8",
            "urn:li:fs_salesProfile:(,,)",
            "urn:li:fs_salesProfile:(ACw, ,xqt8)",
        ];
        for input in invalid {
            let err = entity_urn(input).unwrap_err();
            assert_eq!(err, UrnError::InvalidFormat, "input: {input:?}");
            assert_eq!(err.to_string(), "invalid URN format");
        }
    }

    #[test]
    fn test_entity_urn_keeps_profile_id_untrimmed() {
        let urn = entity_urn("urn:li:fs_salesProfile:( ACw , NAME_SEARCH , xqt8 )").unwrap();
        assert_eq!(urn.profile_id, " ACw ");
        assert_eq!(urn.auth_type, "NAME_SEARCH");
        assert_eq!(urn.auth_token, "xqt8");
        // The lenient extractor trims
        assert_eq!(urn_extractor("urn:li:fs_salesProfile:( ACw , NAME_SEARCH , xqt8 )"), "ACw");
    }

    #[test]
    fn test_entity_urn_never_panics() {
        let malformed = [
            "urn:li:fs_salesProfile:(",
            "urn:li:fs_salesProfile:)",
            "urn:li:fs_salesProfile:(,)",
            "urn:li:fs_salesProfile:(,,)",
            "urn:",
            ":",
            "random string",
            "urn:li:fs_salesProfile:(malformed",
            "urn:li:fs_salesProfile:)(",
        ];
        for input in malformed {
            assert!(entity_urn(input).is_err(), "input: {input:?}");
            let _ = urn_extractor(input);
            let _ = sales_profile_url_from_urn(input);
        }
    }

    #[test]
    fn test_sales_company_url_from_urn() {
        let cases = [
            ("urn:li:fs_salesCompany:34307789", "https://www.linkedin.com/sales/company/34307789"),
            ("urn:li:fs_salesCompany:12345", "https://www.linkedin.com/sales/company/12345"),
            ("urn:li:fs_salesCompany", ""),
            ("urn:li:fs:salesCompany:34307789:extra", ""),
            ("urn:li:fs_salesCompany:", ""),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(sales_company_url_from_urn(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_sales_profile_url_from_urn() {
        assert_eq!(
            sales_profile_url_from_urn("urn:li:fs_salesProfile:(ACwAAAJlc6wBYdHGFmVJDHu,NAME_SEARCH,ij9X)"),
            "https://www.linkedin.com/sales/people/ACwAAAJlc6wBYdHGFmVJDHu"
        );
        assert_eq!(sales_profile_url_from_urn("urn:li:member:22719531"), "");
        assert_eq!(extract_sales_profile_id_from_urn("urn:li:member:22719531"), "22719531");
    }
}
