//! Property-based tests for the projects list.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::config::GitosisConfig;
    use crate::diagnostics::Diagnostics;
    use crate::encoding::{decode_line, encode_field, encode_line};
    use crate::listing::generate;
    use proptest::prelude::*;
    use std::path::Path;

    fn gitweb_value(value: Option<bool>) -> String {
        match value {
            Some(true) => "gitweb = yes\n".to_string(),
            Some(false) => "gitweb = no\n".to_string(),
            None => String::new(),
        }
    }

    fn listing_for(content: &str) -> String {
        let config = GitosisConfig::parse(content).unwrap();
        let mut out = Vec::new();
        let mut diagnostics = Diagnostics::new();
        generate(&config, Path::new("/nonexistent"), &mut out, &mut diagnostics).unwrap();
        String::from_utf8(out).unwrap()
    }

    // ============================================================================
    // encoding property tests
    // ============================================================================

    proptest! {
        /// Property: decoding an encoded line yields the original fields
        #[test]
        fn encode_line_is_reversible(name in ".+", owner in proptest::option::of(".*")) {
            let mut fields = vec![name];
            fields.extend(owner);
            let line = encode_line(&fields);
            prop_assert_eq!(decode_line(&line), fields);
        }

        /// Property: an encoded field never contains separators
        #[test]
        fn encoded_field_has_no_whitespace(input in ".*") {
            let encoded = encode_field(&input);
            prop_assert!(!encoded.contains(char::is_whitespace));
            prop_assert!(encoded.is_ascii());
        }

        /// Property: alphanumerics pass through unchanged
        #[test]
        fn encode_field_preserves_alphanumeric(input in "[a-zA-Z0-9]+") {
            prop_assert_eq!(encode_field(&input), input);
        }
    }

    // ============================================================================
    // listing property tests
    // ============================================================================

    proptest! {
        /// Property: the section flag wins; otherwise the global flag; otherwise hidden
        #[test]
        fn visibility_precedence(global in proptest::option::of(any::<bool>()),
                                 local in proptest::option::of(any::<bool>())) {
            let content = format!(
                "[gitosis]\n{}[repo alpha]\n{}",
                gitweb_value(global),
                gitweb_value(local)
            );
            let expected = local.or(global).unwrap_or(false);
            let out = listing_for(&content);
            prop_assert_eq!(out == "alpha\n", expected);
            prop_assert_eq!(out.is_empty(), !expected);
        }

        /// Property: sections other than `repo NAME` never produce a line
        #[test]
        fn non_repo_sections_never_listed(kind in "[a-z]{1,8}", name in "[a-z]{1,8}") {
            prop_assume!(kind != "repo");
            let content = format!("[gitosis]\ngitweb = yes\n[{} {}]\ngitweb = yes\n", kind, name);
            prop_assert_eq!(listing_for(&content), "");
        }

        /// Property: field count is 2 with an owner and 1 without
        #[test]
        fn owner_controls_field_count(name in "[a-z][a-z0-9]{0,10}",
                                      owner in proptest::option::of("[A-Za-z][A-Za-z ]{0,15}[A-Za-z]")) {
            let owner_line = owner
                .as_ref()
                .map(|o| format!("owner = {}\n", o))
                .unwrap_or_default();
            let content = format!("[repo {}]\ngitweb = yes\n{}", name, owner_line);
            let out = listing_for(&content);
            let fields = decode_line(&out);
            prop_assert_eq!(fields.len(), if owner.is_some() { 2 } else { 1 });
            prop_assert_eq!(&fields[0], &name);
            if let Some(owner) = owner {
                prop_assert_eq!(&fields[1], &owner);
            }
        }
    }
}
