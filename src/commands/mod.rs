//! Command handlers
//!
//! Each handler loads what it needs from [`AppContext`], runs one use case
//! and prints the outcome.

pub mod context;
pub mod deploy;
pub mod proxy;

use anyhow::{Context as _, Result};
use tracing::{debug, warn};

use zeroops::domain::ports::{EventSink, NoopEventSink};
use zeroops::infrastructure::fs::zeroops_home_dir;
use zeroops::{Config, FsTargetStore, RemoteLayout, SshExecutor};

use crate::ui::output::ConsoleEventSink;

/// Resolved configuration and state store for one invocation
pub struct AppContext {
    pub config: Config,
    pub store: FsTargetStore,
    pub json: bool,
}

impl AppContext {
    pub fn load(json: bool) -> Result<Self> {
        let root = zeroops_home_dir()
            .context("cannot determine home directory; set ZEROOPS_HOME")?;
        debug!(root = %root.display(), "state directory");

        let (config, warnings) = Config::load_or_default(&root)?;
        for warning in &warnings {
            warn!("{}", warning);
        }

        Ok(Self {
            config: config.with_env_overrides(),
            store: FsTargetStore::with_root(root),
            json,
        })
    }

    pub fn executor(&self) -> SshExecutor {
        SshExecutor::new(self.config.ssh.options())
    }

    pub fn layout(&self) -> RemoteLayout {
        self.config.remote.layout()
    }

    /// Progress goes to stdout unless JSON output was requested
    pub fn events(&self) -> Box<dyn EventSink> {
        if self.json {
            Box::new(NoopEventSink)
        } else {
            Box::new(ConsoleEventSink)
        }
    }
}
