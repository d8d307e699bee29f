//! Proxy Use Case
//!
//! Installs one nginx site fragment per app:
//! 1. Resolve the current target
//! 2. Check the local fragment exists
//! 3. Upload it via staging into the sites directory, named after the app
//! 4. Reload the proxy
//!
//! There is no compensation step. A fragment moved into place before a
//! failed reload stays there.

use std::path::PathBuf;

use tracing::info;

use crate::domain::layout::RemoteLayout;
use crate::domain::ports::{
    upload_via_staging, EventSink, NoopEventSink, OpsEvent, RemoteExecutor, TargetRepository,
};
use crate::domain::target::validate_name;
use crate::error::{ZeroopsError, ZeroopsResult};

/// Staging file name; the local fragment's own name never reaches the remote
const PROXY_STAGING_NAME: &str = "proxy.conf";

/// Inputs for one `proxy add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyOptions {
    pub app: String,
    /// Local nginx fragment
    pub conf: PathBuf,
}

impl ProxyOptions {
    pub fn new(app: impl Into<String>, conf: impl Into<PathBuf>) -> Self {
        Self {
            app: app.into(),
            conf: conf.into(),
        }
    }
}

pub struct ProxyUseCase<TR, RE>
where
    TR: TargetRepository,
    RE: RemoteExecutor,
{
    targets: TR,
    executor: RE,
    layout: RemoteLayout,
}

impl<TR, RE> ProxyUseCase<TR, RE>
where
    TR: TargetRepository,
    RE: RemoteExecutor,
{
    pub fn new(targets: TR, executor: RE, layout: RemoteLayout) -> Self {
        Self {
            targets,
            executor,
            layout,
        }
    }

    pub fn add(&self, options: &ProxyOptions) -> ZeroopsResult<String> {
        self.add_with_events(options, &NoopEventSink)
    }

    /// Install the fragment and reload; returns the remote fragment path
    pub fn add_with_events(
        &self,
        options: &ProxyOptions,
        events: &dyn EventSink,
    ) -> ZeroopsResult<String> {
        let app = options.app.as_str();
        validate_name(app, "app name")?;

        let target = self.targets.current()?;
        if !options.conf.is_file() {
            return Err(ZeroopsError::FileNotFound {
                path: options.conf.clone(),
            });
        }
        info!(app, target = %target, conf = %options.conf.display(), "installing proxy entry");

        let remote = self.layout.proxy_entry(app);

        events.on_event(OpsEvent::Uploading {
            local: options.conf.clone(),
            remote: remote.clone(),
        });
        upload_via_staging(
            &self.executor,
            &self.layout,
            &target,
            &options.conf,
            &self.layout.staging_path(app, PROXY_STAGING_NAME),
            &remote,
        )?;

        events.on_event(OpsEvent::ReloadingProxy);
        self.executor.run(&target, &self.layout.reload_proxy())?;

        events.on_event(OpsEvent::ProxyInstalled {
            app: app.to_string(),
            remote: remote.clone(),
        });
        Ok(remote)
    }

    /// Print an app's installed fragment
    pub fn status(&self, app: &str) -> ZeroopsResult<()> {
        validate_name(app, "app name")?;
        let target = self.targets.current()?;
        self.executor.run(&target, &self.layout.show_proxy(app))
    }

    pub fn list(&self) -> ZeroopsResult<()> {
        let target = self.targets.current()?;
        self.executor.run(&target, &self.layout.list_proxies())
    }

    /// Delete an app's fragment and reload
    pub fn remove(&self, app: &str) -> ZeroopsResult<()> {
        validate_name(app, "app name")?;
        let target = self.targets.current()?;
        self.executor.run(&target, &self.layout.remove_proxy(app))
    }
}
