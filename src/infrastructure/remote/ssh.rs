//! SSH Remote Executor
//!
//! Shells out to the system `ssh` and `scp` programs. Authentication is
//! whatever those programs already do (agent, `~/.ssh/config`, or the
//! target's `key`). Output goes straight to this process's stdout/stderr and
//! every call opens a fresh connection.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::RemoteExecutor;
use crate::domain::target::Target;
use crate::error::{ZeroopsError, ZeroopsResult};

/// `ssh` reserves this exit status for its own (connection) failures
const SSH_CONNECTION_FAILURE: i32 = 255;

/// Programs and extra arguments used to reach a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshOptions {
    pub program: String,
    pub scp_program: String,
    /// Passed to both `ssh` and `scp` before the destination
    pub extra_args: Vec<String>,
}

impl Default for SshOptions {
    fn default() -> Self {
        Self {
            program: "ssh".to_string(),
            scp_program: "scp".to_string(),
            extra_args: Vec::new(),
        }
    }
}

pub struct SshExecutor {
    options: SshOptions,
}

impl SshExecutor {
    pub fn new(options: SshOptions) -> Self {
        Self { options }
    }

    fn common_args(&self, target: &Target) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(key) = &target.key {
            args.push("-i".to_string());
            args.push(expand_tilde(key).display().to_string());
        }
        args.extend(self.options.extra_args.iter().cloned());
        args
    }

    /// Build (but do not spawn) the `ssh` invocation for a command
    pub fn ssh_command(&self, target: &Target, command: &str) -> Command {
        let mut cmd = Command::new(&self.options.program);
        cmd.args(self.common_args(target))
            .arg("--")
            .arg(target.destination())
            .arg(command);
        cmd
    }

    /// Build (but do not spawn) the `scp` invocation for one file
    pub fn scp_command(&self, target: &Target, local: &Path, remote: &str) -> Command {
        let mut cmd = Command::new(&self.options.scp_program);
        cmd.args(self.common_args(target))
            .arg("--")
            .arg(local)
            .arg(format!("{}:{}", target.destination(), remote));
        cmd
    }
}

impl Default for SshExecutor {
    fn default() -> Self {
        Self::new(SshOptions::default())
    }
}

impl RemoteExecutor for SshExecutor {
    fn run(&self, target: &Target, command: &str) -> ZeroopsResult<()> {
        let destination = target.destination();
        debug!(program = %self.options.program, %destination, command, "ssh");

        let status = self
            .ssh_command(target, command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ZeroopsError::Connection {
                destination: destination.clone(),
                message: format!("failed to start {}: {}", self.options.program, e),
            })?;

        match status.code() {
            Some(0) => Ok(()),
            Some(SSH_CONNECTION_FAILURE) => Err(ZeroopsError::Connection {
                destination,
                message: format!("{} exited with status 255", self.options.program),
            }),
            code => Err(ZeroopsError::RemoteExit {
                destination,
                command: command.to_string(),
                code,
            }),
        }
    }

    fn copy_file(&self, target: &Target, local: &Path, remote: &str) -> ZeroopsResult<()> {
        let destination = target.destination();
        debug!(
            program = %self.options.scp_program,
            local = %local.display(),
            %destination,
            remote,
            "scp"
        );

        let transfer_failed = |message: String| ZeroopsError::Transfer {
            local: local.to_path_buf(),
            destination: destination.clone(),
            remote: remote.to_string(),
            message,
        };

        let status = self
            .scp_command(target, local, remote)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                transfer_failed(format!(
                    "failed to start {}: {}",
                    self.options.scp_program, e
                ))
            })?;

        if !status.success() {
            return Err(transfer_failed(match status.code() {
                Some(code) => format!("{} exited with status {}", self.options.scp_program, code),
                None => format!("{} terminated by signal", self.options.scp_program),
            }));
        }
        Ok(())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
