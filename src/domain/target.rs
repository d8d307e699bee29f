//! Target value object
//!
//! A target is one remote deployment endpoint: an SSH login (`user@host`)
//! plus an optional private key path. Targets are stored by name.

use std::fmt;

use crate::error::{ZeroopsError, ZeroopsResult};

/// Scheme prefix every target URI must start with
pub const TARGET_URI_PREFIX: &str = "host=ssh://";

/// A named remote deployment endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub host: String,
    pub user: String,
    /// Path to a private key passed to `ssh -i`
    pub key: Option<String>,
}

impl Target {
    pub fn new(name: impl Into<String>, user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            user: user.into(),
            key: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// SSH destination string (`user@host`)
    pub fn destination(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}@{})", self.name, self.user, self.host)
    }
}

/// Parse a `host=ssh://user@host` URI into `(user, host)`.
///
/// The remainder after the prefix must contain exactly one `@` with a
/// non-empty user before it and a non-empty host after it.
pub fn parse_target_uri(raw: &str) -> ZeroopsResult<(String, String)> {
    let invalid = |reason: &str| ZeroopsError::InvalidUri {
        uri: raw.to_string(),
        reason: reason.to_string(),
    };

    let rest = raw
        .strip_prefix(TARGET_URI_PREFIX)
        .ok_or_else(|| invalid("must be like host=ssh://user@ip"))?;

    if rest.matches('@').count() != 1 {
        return Err(invalid("expected exactly one '@' in user@host"));
    }

    let (user, host) = rest
        .split_once('@')
        .ok_or_else(|| invalid("expected user@host"))?;

    if user.is_empty() {
        return Err(invalid("user is empty"));
    }
    if host.is_empty() {
        return Err(invalid("host is empty"));
    }
    if rest.chars().any(char::is_whitespace) {
        return Err(invalid("user and host must not contain whitespace"));
    }
    check_login_field("user", user).map_err(|reason| invalid(&reason))?;
    check_login_field("host", host).map_err(|reason| invalid(&reason))?;

    Ok((user.to_string(), host.to_string()))
}

/// Reject a user or host that `ssh`/`scp` would read as an option.
pub fn check_login_field(field: &str, value: &str) -> Result<(), String> {
    if value.starts_with('-') {
        return Err(format!("{} must not start with '-'", field));
    }
    Ok(())
}

/// Validate a target or app name.
///
/// Names become local file names and remote path segments, so they are
/// limited to `[A-Za-z0-9][A-Za-z0-9._-]*`.
pub fn validate_name(name: &str, what: &'static str) -> ZeroopsResult<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(ZeroopsError::MissingArgument { what });
    };

    let valid = first.is_ascii_alphanumeric()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if !valid {
        return Err(ZeroopsError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}
