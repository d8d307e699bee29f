//! State directory resolution with test isolation support.
//!
//! zeroops keeps its contexts, current-context pointer, lock file and
//! config under `~/.zeroops`. Setting `ZEROOPS_HOME` replaces that whole
//! directory, which is how the integration tests isolate themselves.
//! `dirs::home_dir()` ignores `HOME` on Windows, so an explicit override is
//! the only portable way to redirect it.

use std::path::PathBuf;

/// Environment variable overriding the state directory.
pub const ZEROOPS_HOME_VAR: &str = "ZEROOPS_HOME";

/// Directory name under the user's home
pub const STATE_DIR_NAME: &str = ".zeroops";

/// Get the zeroops state directory.
///
/// # Returns
///
/// - `Some(PathBuf)` - `$ZEROOPS_HOME`, or `<home>/.zeroops`
/// - `None` - If neither is resolvable
///
/// # Example
///
/// ```
/// use zeroops::infrastructure::fs::zeroops_home_dir;
///
/// if let Some(state) = zeroops_home_dir() {
///     let contexts = state.join("contexts");
/// }
/// ```
pub fn zeroops_home_dir() -> Option<PathBuf> {
    std::env::var_os(ZEROOPS_HOME_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(STATE_DIR_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroops_home_dir_respects_override() {
        let test_home = "/test/fake/state";

        // SAFETY: no other test in this crate reads or writes ZEROOPS_HOME
        unsafe {
            std::env::set_var(ZEROOPS_HOME_VAR, test_home);
        }

        let result = zeroops_home_dir();

        unsafe {
            std::env::remove_var(ZEROOPS_HOME_VAR);
        }

        assert_eq!(result, Some(PathBuf::from(test_home)));
    }
}
