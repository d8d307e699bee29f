//! Error types for zeroops
//!
//! Every failure the library can report is a variant of [`ZeroopsError`].
//! Variants carry the path, command or destination of the step that failed,
//! and [`ZeroopsError::kind`] folds them into the five user-facing kinds.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for zeroops operations
pub type ZeroopsResult<T> = Result<T, ZeroopsError>;

/// Coarse classification of an error, used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input shape (missing name, malformed URI or template, invalid record)
    Validation,
    /// Something that should exist does not (current target, local file)
    NotFound,
    /// Local read/write failure
    Io,
    /// Remote copy or privileged move failed
    Transfer,
    /// Remote command exited non-zero or the connection failed
    RemoteExec,
}

impl ErrorKind {
    /// Stable name used in JSON error output
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Io => "io",
            Self::Transfer => "transfer",
            Self::RemoteExec => "remote_exec",
        }
    }
}

/// Main error type for zeroops operations
#[derive(Error, Debug)]
pub enum ZeroopsError {
    /// A required positional argument was empty
    #[error("{what} is required")]
    MissingArgument { what: &'static str },

    /// Target or app name cannot be used as a file name / path segment
    #[error("invalid name '{name}': use letters, digits, '.', '_' or '-' and start with a letter or digit")]
    InvalidName { name: String },

    /// Target URI does not look like `host=ssh://user@host`
    #[error("invalid target URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// A persisted target record failed schema validation
    #[error("invalid context record '{name}' ({path}): {message}")]
    InvalidRecord {
        name: String,
        path: PathBuf,
        message: String,
    },

    /// No current-target pointer has been set
    #[error("no current context selected (run `zeroops context use <name>`)")]
    NoCurrentTarget,

    /// Named target is not in the store
    #[error("context '{name}' not found")]
    TargetNotFound { name: String },

    /// Local input file does not exist
    #[error("file {path} does not exist")]
    FileNotFound { path: PathBuf },

    /// Local read failure
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Local write failure
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template could not be parsed
    #[error("failed to parse template {path}: {message}")]
    TemplateParse { path: PathBuf, message: String },

    /// Template parsed but rendering failed (including strict-mode misses)
    #[error("failed to render template {path}: {message}")]
    TemplateRender { path: PathBuf, message: String },

    /// Copy to the remote host or privileged move into place failed
    #[error("transfer of {local} to {destination}:{remote} failed: {message}")]
    Transfer {
        local: PathBuf,
        destination: String,
        remote: String,
        message: String,
    },

    /// Remote shell could not be started or the connection dropped
    #[error("connection to {destination} failed: {message}")]
    Connection { destination: String, message: String },

    /// Remote command ran and returned a non-zero status
    #[error("remote command `{command}` on {destination} exited with {}", exit_label(.code))]
    RemoteExit {
        destination: String,
        command: String,
        code: Option<i32>,
    },

    /// Configuration file is malformed
    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Store lock could not be acquired
    #[error("failed to lock context store {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl ZeroopsError {
    /// Classify this error into one of the user-facing kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. }
            | Self::InvalidName { .. }
            | Self::InvalidUri { .. }
            | Self::InvalidRecord { .. }
            | Self::TemplateParse { .. }
            | Self::TemplateRender { .. }
            | Self::Config { .. } => ErrorKind::Validation,
            Self::NoCurrentTarget | Self::TargetNotFound { .. } | Self::FileNotFound { .. } => {
                ErrorKind::NotFound
            }
            Self::ReadFailed { .. }
            | Self::WriteFailed { .. }
            | Self::Lock { .. } => ErrorKind::Io,
            Self::Transfer { .. } => ErrorKind::Transfer,
            Self::Connection { .. } | Self::RemoteExit { .. } => ErrorKind::RemoteExec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_remote_exit() {
        let err = ZeroopsError::RemoteExit {
            destination: "alice@1.2.3.4".to_string(),
            command: "ls -1 '/apps'".to_string(),
            code: Some(2),
        };
        assert_eq!(
            err.to_string(),
            "remote command `ls -1 '/apps'` on alice@1.2.3.4 exited with status 2"
        );
    }

    #[test]
    fn test_error_display_signal() {
        let err = ZeroopsError::RemoteExit {
            destination: "alice@host".to_string(),
            command: "true".to_string(),
            code: None,
        };
        assert!(err.to_string().ends_with("no status (terminated by signal)"));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(ZeroopsError::NoCurrentTarget.kind(), ErrorKind::NotFound);
        assert_eq!(
            ZeroopsError::MissingArgument { what: "app name" }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            ZeroopsError::Connection {
                destination: "a@b".to_string(),
                message: "refused".to_string()
            }
            .kind(),
            ErrorKind::RemoteExec
        );
        assert_eq!(
            ZeroopsError::ReadFailed {
                path: PathBuf::from(".env"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
            .kind(),
            ErrorKind::Io
        );
    }
}
