//! Property tests for shell quoting of remote paths.

use proptest::prelude::*;

use zeroops::domain::shell_quote;

/// Undo POSIX single-quoting as a shell would
fn unquote(quoted: &str) -> Option<String> {
    let mut out = String::new();
    let mut rest = quoted;
    while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix('\'') {
            let end = stripped.find('\'')?;
            out.push_str(&stripped[..end]);
            rest = &stripped[end + 1..];
        } else if let Some(stripped) = rest.strip_prefix("\\'") {
            out.push('\'');
            rest = stripped;
        } else {
            return None;
        }
    }
    Some(out)
}

proptest! {
    /// PROPERTY: Quoting is reversible, so no input can break out of its argument.
    #[test]
    fn prop_quote_round_trips(input in ".*") {
        prop_assert_eq!(unquote(&shell_quote(&input)), Some(input));
    }
}
