//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::layout::RemoteLayout;
use crate::error::ZeroopsResult;
use crate::infrastructure::remote::SshOptions;

use super::loader::{self, ConfigWarning};

/// Local file names used by `deploy add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    pub env_file: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
    /// Remove the remote app directory when `compose up` fails
    pub cleanup_on_failure: bool,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(".env"),
            template: PathBuf::from("docker-compose.tpl.yml"),
            output: PathBuf::from("docker-compose.yml"),
            cleanup_on_failure: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Fail on placeholders with no value instead of rendering ""
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub conf: PathBuf,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            conf: PathBuf::from("nginx.conf"),
        }
    }
}

/// Remote host layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub apps_root: String,
    pub sites_dir: String,
    pub staging_dir: String,
    pub sudo: bool,
    pub compose_command: String,
    pub reload_command: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        let layout = RemoteLayout::default();
        Self {
            apps_root: layout.apps_root,
            sites_dir: layout.sites_dir,
            staging_dir: layout.staging_dir,
            sudo: layout.sudo,
            compose_command: layout.compose_command,
            reload_command: layout.reload_command,
        }
    }
}

impl RemoteConfig {
    pub fn layout(&self) -> RemoteLayout {
        RemoteLayout {
            apps_root: self.apps_root.clone(),
            sites_dir: self.sites_dir.clone(),
            staging_dir: self.staging_dir.clone(),
            sudo: self.sudo,
            compose_command: self.compose_command.clone(),
            reload_command: self.reload_command.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SshConfig {
    pub program: String,
    pub scp_program: String,
    /// Extra arguments passed to both ssh and scp, e.g. `["-o", "BatchMode=yes"]`
    pub options: Vec<String>,
}

impl Default for SshConfig {
    fn default() -> Self {
        let defaults = SshOptions::default();
        Self {
            program: defaults.program,
            scp_program: defaults.scp_program,
            options: defaults.extra_args,
        }
    }
}

impl SshConfig {
    pub fn options(&self) -> SshOptions {
        SshOptions {
            program: self.program.clone(),
            scp_program: self.scp_program.clone(),
            extra_args: self.options.clone(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub template: TemplateConfig,

    #[serde(default)]
    pub proxy: ProxyConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub ssh: SshConfig,
}

impl Config {
    /// Load `config.toml` from the state directory, or defaults if it is absent
    pub fn load_or_default(state_dir: &Path) -> ZeroopsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(state_dir)
    }

    /// Apply environment variable overrides (ZEROOPS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
