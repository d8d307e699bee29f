//! Deploy Options

use std::path::PathBuf;

use crate::infrastructure::template::RenderMode;

/// Inputs for one `deploy add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    pub app: String,
    /// Local `KEY=VALUE` file, also uploaded as the remote `.env`
    pub env_file: PathBuf,
    /// Manifest template
    pub template: PathBuf,
    /// Where the rendered manifest is written locally
    pub output: PathBuf,
    pub render_mode: RenderMode,
    /// Remove the remote app directory when bring-up fails
    pub cleanup_on_failure: bool,
}

impl DeployOptions {
    pub fn new(app: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            env_file: PathBuf::from(".env"),
            template: PathBuf::from("docker-compose.tpl.yml"),
            output: PathBuf::from("docker-compose.yml"),
            render_mode: RenderMode::default(),
            cleanup_on_failure: true,
        }
    }

    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self
    }

    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = path.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    pub fn with_cleanup_on_failure(mut self, cleanup: bool) -> Self {
        self.cleanup_on_failure = cleanup;
        self
    }
}
