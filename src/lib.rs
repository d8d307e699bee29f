//! zeroops - deploy docker-compose apps to a VPS over SSH
//!
//! Named SSH targets are kept in a small local store. A deploy renders a
//! compose manifest from a template and an env file, copies both into
//! `/apps/<app>` on the current target, and brings the app up. Nginx site
//! fragments are installed and reloaded the same way.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use application::{
    DeployOptions, DeployResult, DeployUseCase, ProxyOptions, ProxyUseCase, TargetListing,
    TargetsUseCase,
};
pub use config::Config;
pub use domain::{EnvMapping, RemoteLayout, Target};
pub use error::{ErrorKind, ZeroopsError, ZeroopsResult};
pub use infrastructure::{FsTargetStore, RenderMode, SshExecutor, SshOptions, TemplateRenderer};
