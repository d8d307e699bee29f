//! Deploy Result

use std::path::PathBuf;

/// Outcome of a successful deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployResult {
    pub app: String,
    /// `user@host` the app was deployed to
    pub destination: String,
    /// Remote app directory
    pub remote_dir: String,
    /// Local rendered manifest
    pub manifest: PathBuf,
}
