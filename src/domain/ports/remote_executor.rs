//! Remote Executor Port
//!
//! The only way the rest of the crate touches a target host: run one shell
//! command, or copy one file. Both stream their output straight to the
//! invoking process and neither retries.

use std::path::Path;

use tracing::debug;

use crate::domain::layout::RemoteLayout;
use crate::domain::target::Target;
use crate::error::{ZeroopsError, ZeroopsResult};

/// Runs commands on and copies files to a target host
///
/// Implementations:
/// - `SshExecutor`: the system `ssh` / `scp` programs
/// - recording fakes in tests
pub trait RemoteExecutor {
    /// Run a shell command on the target, blocking until it exits.
    ///
    /// A non-zero exit is `RemoteExit`; a failed connection is `Connection`.
    fn run(&self, target: &Target, command: &str) -> ZeroopsResult<()>;

    /// Copy a local file to a path the login user can write.
    ///
    /// Any failure is `Transfer`.
    fn copy_file(&self, target: &Target, local: &Path, remote: &str) -> ZeroopsResult<()>;
}

impl<T: RemoteExecutor + ?Sized> RemoteExecutor for &T {
    fn run(&self, target: &Target, command: &str) -> ZeroopsResult<()> {
        (**self).run(target, command)
    }

    fn copy_file(&self, target: &Target, local: &Path, remote: &str) -> ZeroopsResult<()> {
        (**self).copy_file(target, local, remote)
    }
}

/// Two-phase transfer: copy to the staging path, then privileged-move into
/// `destination`.
///
/// The login user usually cannot write privileged destinations directly, so
/// the file lands in the staging directory first and `sudo mv` relocates it.
/// A failed move is reported as `Transfer`, like a failed copy.
pub fn upload_via_staging(
    executor: &dyn RemoteExecutor,
    layout: &RemoteLayout,
    target: &Target,
    local: &Path,
    staging: &str,
    destination: &str,
) -> ZeroopsResult<()> {
    debug!(
        local = %local.display(),
        staging,
        destination,
        "two-phase upload"
    );

    executor.copy_file(target, local, staging)?;

    executor
        .run(target, &layout.move_into_place(staging, destination))
        .map_err(|e| ZeroopsError::Transfer {
            local: local.to_path_buf(),
            destination: target.destination(),
            remote: destination.to_string(),
            message: format!("privileged move failed: {}", e),
        })
}
