//! Configuration module for zeroops
//!
//! Settings are resolved in this order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ZEROOPS_*)
//! 3. `config.toml` in the state directory
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{config_path, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{Config, DeployConfig, ProxyConfig, RemoteConfig, SshConfig, TemplateConfig};
