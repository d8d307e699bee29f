//! Property tests for env file parsing.

use proptest::prelude::*;

use zeroops::EnvMapping;

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z_][A-Z0-9_]{0,12}").unwrap()
}

fn value() -> impl Strategy<Value = String> {
    // No newlines, no surrounding whitespace
    proptest::string::string_regex("[A-Za-z0-9=:/._-]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn prop_parse_never_panics(input in ".*") {
        let _ = EnvMapping::parse(&input);
    }

    /// PROPERTY: Every written KEY=VALUE line is read back; the last value wins.
    #[test]
    fn prop_written_pairs_read_back(pairs in proptest::collection::vec((key(), value()), 0..12)) {
        let content: String = pairs
            .iter()
            .map(|(k, v)| format!("{}={}\n", k, v))
            .collect();
        let env = EnvMapping::parse(&content);

        for (k, _) in &pairs {
            let last = pairs.iter().rev().find(|(k2, _)| k2 == k).map(|(_, v)| v.as_str());
            prop_assert_eq!(env.get(k), last);
        }
    }

    /// PROPERTY: Comment lines and lines without '=' contribute nothing.
    #[test]
    fn prop_comments_ignored(comment in "[^\n=]{0,30}") {
        let content = format!("# {}\n{}\n", comment, comment.replace('#', ""));
        prop_assert!(EnvMapping::parse(&content).is_empty());
    }
}
