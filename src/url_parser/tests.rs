#[cfg(test)]
mod tests {
    use crate::url_parser::normalizer::*;

    #[test]
    fn test_extract_host_and_path() {
        let cases = [
            ("https://www.linkedin.com/company/surfe/", "linkedin.com/company/surfe"),
            ("https://linkedin.com/company/surfe/", "linkedin.com/company/surfe"),
            ("http://www.linkedin.com/company/surfe/", "linkedin.com/company/surfe"),
            ("http://linkedin.com/company/surfe", "linkedin.com/company/surfe"),
            // No scheme means no authority, so www. is part of the path
            ("www.linkedin.com/company/surfe/", "www.linkedin.com/company/surfe"),
            ("linkedin.com/company/surfe/", "linkedin.com/company/surfe"),
            (":/linkedin.com/company/surfe/", ":/linkedin.com/company/surfe"),
            ("this is not an URL", "this is not an URL"),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(extract_host_and_path(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_extract_host_and_path_casing() {
        // www. is matched case-insensitively, the rest of the host keeps its case
        assert_eq!(
            extract_host_and_path("https://WWW.Linkedin.com/company/surfe/"),
            "Linkedin.com/company/surfe"
        );
        // Paths are never lower-cased
        assert_eq!(
            extract_host_and_path("https://linkedin.com/company/Surfe"),
            "linkedin.com/company/Surfe"
        );
    }

    #[test]
    fn test_extract_host_and_path_drops_query_and_fragment() {
        assert_eq!(
            extract_host_and_path("https://www.linkedin.com/in/jude-don?x=1#about"),
            "linkedin.com/in/jude-don"
        );
    }

    #[test]
    fn test_extract_host_and_path_decodes_path() {
        assert_eq!(
            extract_host_and_path("https://www.linkedin.com/in/cl%C3%A9mence"),
            "linkedin.com/in/clémence"
        );
        // Broken escapes make the whole string unparseable
        assert_eq!(extract_host_and_path("https://linkedin.com/in/%zz/"), "https://linkedin.com/in/%zz");
    }

    #[test]
    fn test_extract_host_and_path_is_idempotent() {
        let inputs = [
            "https://www.linkedin.com/company/surfe/",
            "http://linkedin.com/in/jude-don?x=1",
            "https://app.surfe.com/settings",
        ];
        for input in inputs {
            let key = extract_host_and_path(input);
            for prefix in ["https://", "http://", "https://www.", "http://www."] {
                for suffix in ["", "/"] {
                    let respelled = format!("{prefix}{key}{suffix}");
                    assert_eq!(extract_host_and_path(&respelled), key, "respelled: {respelled}");
                }
            }
        }
    }

    #[test]
    fn test_generate_url_combinations() {
        let combinations = generate_url_combinations("https://www.linkedin.com/company/surfe/");
        assert_eq!(
            combinations,
            vec![
                "https://www.linkedin.com/company/surfe/",
                "http://www.linkedin.com/company/surfe/",
                "https://linkedin.com/company/surfe/",
                "http://linkedin.com/company/surfe/",
                "https://www.linkedin.com/company/surfe",
                "http://www.linkedin.com/company/surfe",
                "https://linkedin.com/company/surfe",
                "http://linkedin.com/company/surfe",
            ]
        );
    }

    #[test]
    fn test_generate_url_combinations_any_string() {
        let combinations = generate_url_combinations("any string");
        assert_eq!(combinations.len(), 8);
        assert_eq!(combinations[0], "https://www.any string/");
        assert_eq!(combinations[7], "http://any string");
    }

    #[test]
    fn test_generate_url_combinations_empty() {
        assert!(generate_url_combinations("").is_empty());
    }

    #[test]
    fn test_combinations_normalize_back_to_the_same_key() {
        for input in ["https://www.linkedin.com/company/surfe/", "linkedin.com/in/jude-don"] {
            let key = extract_host_and_path(input);
            let combinations = generate_url_combinations(input);
            assert_eq!(combinations.len(), 8);
            for combination in combinations {
                assert_eq!(extract_host_and_path(&combination), key, "combination: {combination}");
            }
        }
    }

    #[test]
    fn test_url_hostname_extractor() {
        let cases = [
            ("https://www.surfe.com", "surfe.com"),
            ("http://www.surfe.com", "surfe.com"),
            ("www.surfe.com", "surfe.com"),
            ("https://surfe.com", "surfe.com"),
            ("http://surfe.com/test", "surfe.com"),
            ("http://surfe.com/", "surfe.com"),
            ("http://surfe.com:8080/", "surfe.com"),
            ("", ""),
            ("bad host.com", ""),
            ("https://a.www.surfe.com/x", "a.surfe.com"),
            ("www.www.surfe.com", "surfe.com"),
        ];
        for (input, expected) in cases {
            assert_eq!(url_hostname_extractor(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_remove_query_params() {
        let cases = [
            ("https://www.surfe.com", "https://www.surfe.com"),
            ("https://www.surfe.com/", "https://www.surfe.com"),
            ("https://www.surfe.com?utm_source=linkedin&utm_medium=companypage", "https://www.surfe.com"),
            ("https://www.surfe.com/?utm_source=linkedin", "https://www.surfe.com"),
            ("http://www.surfe.com/?utm_source=linkedin", "http://www.surfe.com"),
            ("https://www.surfe.com/blog/?page=2#top", "https://www.surfe.com/blog#top"),
            ("xxxx", "xxxx"),
        ];
        for (input, expected) in cases {
            assert_eq!(remove_query_params(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_format_domain_url() {
        let cases = [
            ("https://leadjet.io/", "leadjet.io"),
            ("https://leadjet.io", "leadjet.io"),
            ("http://surfe.com", "surfe.com"),
            ("https://www.surfe.com", "www.surfe.com"),
            ("gelsenwasser.de", "gelsenwasser.de"),
            ("xxxx", "xxxx"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_domain_url(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_domain_name_without_tld() {
        assert_eq!(domain_name_without_tld("https://www.surfe.com/some-path"), "surfe");
        assert_eq!(domain_name_without_tld("leadjet.io"), "leadjet");
        assert_eq!(domain_name_without_tld("localhost"), "localhost");
        assert_eq!(domain_name_without_tld("bad host"), "");
    }
}
