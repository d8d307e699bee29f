//! Remote execution over SSH
//!
//! Implements the `RemoteExecutor` port with the system ssh/scp tools.

mod ssh;

pub use ssh::{SshExecutor, SshOptions};
