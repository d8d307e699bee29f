//! Property tests for target URI parsing and name validation.

use proptest::prelude::*;

use zeroops::domain::{parse_target_uri, validate_name};

fn user() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z_][a-z0-9_-]{0,15}").unwrap()
}

fn host() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9][a-z0-9.-]{0,30}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn prop_parse_never_panics(input in ".*") {
        let _ = parse_target_uri(&input);
    }

    /// PROPERTY: A well-formed URI yields exactly the user and host it was built from.
    #[test]
    fn prop_well_formed_uri_splits(user in user(), host in host()) {
        let uri = format!("host=ssh://{}@{}", user, host);
        let (parsed_user, parsed_host) = parse_target_uri(&uri).unwrap();
        prop_assert_eq!(parsed_user, user);
        prop_assert_eq!(parsed_host, host);
    }

    /// PROPERTY: Anything without the `host=ssh://` prefix is rejected.
    #[test]
    fn prop_missing_prefix_rejected(rest in "[a-z]{1,8}@[a-z]{1,8}") {
        prop_assert!(parse_target_uri(&rest).is_err());
        let wrong_scheme = format!("host=tcp://{}", rest);
        prop_assert!(parse_target_uri(&wrong_scheme).is_err());
    }

    /// PROPERTY: A user or host starting with '-' is rejected, so it never reaches ssh as an option.
    #[test]
    fn prop_option_like_parts_rejected(
        option in "-[a-zA-Z][a-zA-Z0-9=_/.-]{0,20}",
        user in user(),
        host in host(),
    ) {
        let as_user = format!("host=ssh://{}@{}", option, host);
        prop_assert!(parse_target_uri(&as_user).is_err());
        let as_host = format!("host=ssh://{}@{}", user, option);
        prop_assert!(parse_target_uri(&as_host).is_err());
    }

    /// PROPERTY: Any accepted URI has a user and host that do not start with '-'.
    #[test]
    fn prop_accepted_parts_are_not_options(input in "host=ssh://.{0,24}") {
        if let Ok((user, host)) = parse_target_uri(&input) {
            prop_assert!(!user.starts_with('-'));
            prop_assert!(!host.starts_with('-'));
        }
    }

    /// PROPERTY: An accepted name never contains a path separator or starts with '.' or '-'.
    #[test]
    fn prop_accepted_names_are_path_safe(name in ".{0,24}") {
        if validate_name(&name, "name").is_ok() {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('/'));
            prop_assert!(!name.contains('\\'));
            prop_assert!(!name.starts_with('.'));
            prop_assert!(!name.starts_with('-'));
        }
    }
}
