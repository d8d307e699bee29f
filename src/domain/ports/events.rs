//! Progress Event Port
//!
//! Deploy and proxy operations report each step as an [`OpsEvent`].
//! The binary prints them; library callers and tests can record or drop them.

use std::path::PathBuf;

/// Event emitted while an operation runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpsEvent {
    /// Manifest template rendered to a local file
    ManifestRendered { template: PathBuf, output: PathBuf },

    /// Remote app directory is being created
    EnsuringDirectory { destination: String, path: String },

    /// A local file is being copied into place on the remote host
    Uploading { local: PathBuf, remote: String },

    /// Container group bring-up started
    BringingUp { app: String },

    /// Bring-up failed; the app directory is being removed
    CleaningUp { path: String },

    /// Cleanup itself failed (the original failure is still reported)
    CleanupFailed { path: String, error: String },

    /// Proxy process reload started
    ReloadingProxy,

    /// Deployment finished successfully
    Deployed { app: String, destination: String },

    /// Proxy fragment installed and reloaded
    ProxyInstalled { app: String, remote: String },
}

/// Trait for receiving progress events
///
/// Implementations:
/// - the binary's console sink: one line per step
/// - `NoopEventSink`: silent operation
pub trait EventSink {
    fn on_event(&self, event: OpsEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn on_event(&self, _event: OpsEvent) {}
}
