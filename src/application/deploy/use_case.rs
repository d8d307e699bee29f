//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Resolve the current target
//! 2. Load the environment file
//! 3. Render the manifest and write it locally
//! 4. Ensure the remote app directory exists
//! 5. Upload the manifest, then the environment file
//! 6. Bring the container group up
//!
//! If step 6 fails the remote app directory is removed (best effort) and the
//! bring-up error is returned. Nothing is retried.

use tracing::{info, warn};

use crate::domain::env_file::EnvMapping;
use crate::domain::layout::{RemoteLayout, REMOTE_ENV_NAME, REMOTE_MANIFEST_NAME};
use crate::domain::ports::{
    upload_via_staging, EventSink, NoopEventSink, OpsEvent, RemoteExecutor, TargetRepository,
};
use crate::domain::target::{validate_name, Target};
use crate::error::ZeroopsResult;
use crate::infrastructure::fs::atomic_write;
use crate::infrastructure::template::TemplateRenderer;

use super::options::DeployOptions;
use super::result::DeployResult;

/// Rendered manifests are world-readable; scp carries the mode to the host
const MANIFEST_MODE: u32 = 0o644;

/// Deploy use case, parameterized by its ports
pub struct DeployUseCase<TR, RE>
where
    TR: TargetRepository,
    RE: RemoteExecutor,
{
    targets: TR,
    executor: RE,
    layout: RemoteLayout,
}

impl<TR, RE> DeployUseCase<TR, RE>
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

    /// Deploy without progress reporting
    pub fn execute(&self, options: &DeployOptions) -> ZeroopsResult<DeployResult> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Deploy, reporting each step to `events`
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        events: &dyn EventSink,
    ) -> ZeroopsResult<DeployResult> {
        let app = options.app.as_str();
        validate_name(app, "app name")?;

        let target = self.targets.current()?;
        info!(app, target = %target, "deploying");

        let env = EnvMapping::load(&options.env_file)?;
        let rendered =
            TemplateRenderer::new(options.render_mode).render_file(&options.template, &env)?;
        atomic_write(&options.output, rendered.as_bytes(), Some(MANIFEST_MODE))?;
        events.on_event(OpsEvent::ManifestRendered {
            template: options.template.clone(),
            output: options.output.clone(),
        });

        let remote_dir = self.layout.app_dir(app);
        events.on_event(OpsEvent::EnsuringDirectory {
            destination: target.destination(),
            path: remote_dir.clone(),
        });
        self.executor.run(&target, &self.layout.ensure_app_dir(app))?;

        let manifest_remote = self.layout.manifest_path(app);
        events.on_event(OpsEvent::Uploading {
            local: options.output.clone(),
            remote: manifest_remote.clone(),
        });
        upload_via_staging(
            &self.executor,
            &self.layout,
            &target,
            &options.output,
            &self.layout.staging_path(app, REMOTE_MANIFEST_NAME),
            &manifest_remote,
        )?;

        let env_remote = self.layout.env_path(app);
        events.on_event(OpsEvent::Uploading {
            local: options.env_file.clone(),
            remote: env_remote.clone(),
        });
        upload_via_staging(
            &self.executor,
            &self.layout,
            &target,
            &options.env_file,
            &self.layout.staging_path(app, REMOTE_ENV_NAME),
            &env_remote,
        )?;

        events.on_event(OpsEvent::BringingUp {
            app: app.to_string(),
        });
        if let Err(err) = self.executor.run(&target, &self.layout.compose_up(app)) {
            if options.cleanup_on_failure {
                self.cleanup(&target, app, events);
            }
            return Err(err);
        }

        events.on_event(OpsEvent::Deployed {
            app: app.to_string(),
            destination: target.destination(),
        });

        Ok(DeployResult {
            app: app.to_string(),
            destination: target.destination(),
            remote_dir,
            manifest: options.output.clone(),
        })
    }

    /// Best-effort removal of a half-deployed app directory
    fn cleanup(&self, target: &Target, app: &str, events: &dyn EventSink) {
        let path = self.layout.app_dir(app);
        events.on_event(OpsEvent::CleaningUp { path: path.clone() });

        if let Err(err) = self.executor.run(target, &self.layout.remove_app_dir(app)) {
            warn!(%path, error = %err, "cleanup after failed bring-up also failed");
            events.on_event(OpsEvent::CleanupFailed {
                path,
                error: err.to_string(),
            });
        }
    }

    /// Show container status for an app
    pub fn status(&self, app: &str) -> ZeroopsResult<()> {
        self.dispatch_for_app(app, |layout| layout.compose_ps(app))
    }

    /// Stop the app and delete its remote directory
    pub fn remove(&self, app: &str) -> ZeroopsResult<()> {
        self.dispatch_for_app(app, |layout| layout.compose_down(app))
    }

    /// List deployed apps
    pub fn list(&self) -> ZeroopsResult<()> {
        let target = self.targets.current()?;
        self.executor.run(&target, &self.layout.list_apps())
    }

    fn dispatch_for_app(
        &self,
        app: &str,
        command: impl FnOnce(&RemoteLayout) -> String,
    ) -> ZeroopsResult<()> {
        validate_name(app, "app name")?;
        let target = self.targets.current()?;
        self.executor.run(&target, &command(&self.layout))
    }
}
