//! Manifest Template Renderer
//!
//! Templates use `{{.KEY}}` placeholders (the bare `{{KEY}}` form works too)
//! and are rendered with handlebars against an [`EnvMapping`]. Output is not
//! HTML-escaped. In lenient mode an unknown key renders as an empty string;
//! strict mode turns it into an error.

use std::path::Path;
use std::sync::OnceLock;

use handlebars::Handlebars;
use regex::Regex;
use tracing::debug;

use crate::domain::env_file::EnvMapping;
use crate::error::{ZeroopsError, ZeroopsResult};

const TEMPLATE_NAME: &str = "manifest";

/// How unresolved placeholders are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Missing keys render as ""
    #[default]
    Lenient,
    /// Missing keys fail the render
    Strict,
}

impl RenderMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

fn dotted_placeholder() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{\s*\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}")
            .expect("placeholder pattern is valid")
    })
}

/// Rewrite `{{.KEY}}` / `{{ .KEY }}` into handlebars' `{{KEY}}`
fn normalize_placeholders(template: &str) -> String {
    dotted_placeholder()
        .replace_all(template, "{{${1}}}")
        .into_owned()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer {
    mode: RenderMode,
}

impl TemplateRenderer {
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    /// Read and render a template file
    pub fn render_file(&self, path: &Path, env: &EnvMapping) -> ZeroopsResult<String> {
        let template = std::fs::read_to_string(path).map_err(|source| ZeroopsError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        self.render_str(path, &template, env)
    }

    /// Render template text; `path` is only used in error messages
    pub fn render_str(
        &self,
        path: &Path,
        template: &str,
        env: &EnvMapping,
    ) -> ZeroopsResult<String> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(self.mode == RenderMode::Strict);

        handlebars
            .register_template_string(TEMPLATE_NAME, normalize_placeholders(template))
            .map_err(|e| ZeroopsError::TemplateParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        debug!(
            template = %path.display(),
            vars = env.len(),
            mode = ?self.mode,
            "rendering manifest"
        );

        handlebars
            .render(TEMPLATE_NAME, env.as_map())
            .map_err(|e| ZeroopsError::TemplateRender {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}
