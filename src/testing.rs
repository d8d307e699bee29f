//! Test doubles shared by unit tests

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::ports::{EventSink, OpsEvent, RemoteExecutor, TargetRepository};
use crate::domain::target::Target;
use crate::error::{ZeroopsError, ZeroopsResult};
use crate::infrastructure::repositories::FsTargetStore;

/// One call made against a [`RecordingExecutor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOp {
    Run(String),
    Copy { local: PathBuf, remote: String },
}

/// Remote executor that records every call and never touches the network
#[derive(Default)]
pub struct RecordingExecutor {
    ops: RefCell<Vec<RemoteOp>>,
    fail_patterns: Vec<String>,
    fail_copies: bool,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `run` exit 1 for commands containing `pattern`
    pub fn fail_when(mut self, pattern: &str) -> Self {
        self.fail_patterns.push(pattern.to_string());
        self
    }

    /// Make every `copy_file` fail
    pub fn fail_copies(mut self) -> Self {
        self.fail_copies = true;
        self
    }

    pub fn ops(&self) -> Vec<RemoteOp> {
        self.ops.borrow().clone()
    }

    /// Only the commands passed to `run`
    pub fn commands(&self) -> Vec<String> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                RemoteOp::Run(command) => Some(command.clone()),
                RemoteOp::Copy { .. } => None,
            })
            .collect()
    }
}

impl RemoteExecutor for RecordingExecutor {
    fn run(&self, target: &Target, command: &str) -> ZeroopsResult<()> {
        self.ops
            .borrow_mut()
            .push(RemoteOp::Run(command.to_string()));

        if self.fail_patterns.iter().any(|p| command.contains(p)) {
            return Err(ZeroopsError::RemoteExit {
                destination: target.destination(),
                command: command.to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }

    fn copy_file(&self, target: &Target, local: &Path, remote: &str) -> ZeroopsResult<()> {
        self.ops.borrow_mut().push(RemoteOp::Copy {
            local: local.to_path_buf(),
            remote: remote.to_string(),
        });

        if self.fail_copies {
            return Err(ZeroopsError::Transfer {
                local: local.to_path_buf(),
                destination: target.destination(),
                remote: remote.to_string(),
                message: "scp exited with status 1".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingEventSink {
    events: RefCell<Vec<OpsEvent>>,
}

impl RecordingEventSink {
    pub fn events(&self) -> Vec<OpsEvent> {
        self.events.borrow().clone()
    }
}

impl EventSink for RecordingEventSink {
    fn on_event(&self, event: OpsEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Store in `root` holding one target, `prod` (alice@1.2.3.4), selected as current
pub fn store_with_current(root: &Path) -> FsTargetStore {
    let store = FsTargetStore::with_root(root);
    store
        .save(&Target::new("prod", "alice", "1.2.3.4"))
        .unwrap();
    store.set_current("prod").unwrap();
    store
}

/// One line per op, with local paths shortened to their file name
pub fn op_log(ops: &[RemoteOp]) -> String {
    ops.iter()
        .map(|op| match op {
            RemoteOp::Run(command) => format!("run  {}", command),
            RemoteOp::Copy { local, remote } => format!(
                "copy {} -> {}",
                local.file_name().unwrap_or_default().to_string_lossy(),
                remote
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
