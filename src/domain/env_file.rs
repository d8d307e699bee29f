//! `.env`-style environment mapping
//!
//! One `KEY=VALUE` per line. Blank lines, `#` comments and lines without
//! `=` are skipped; the first `=` splits key from value and both sides are
//! trimmed. A repeated key keeps its last value. No quoting or coercion.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ZeroopsError, ZeroopsResult};

/// Flat string-to-string mapping loaded from an env file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMapping {
    vars: BTreeMap<String, String>,
}

impl EnvMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse env file content
    pub fn parse(content: &str) -> Self {
        let mut vars = BTreeMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            vars.insert(key.trim().to_string(), value.trim().to_string());
        }
        Self { vars }
    }

    /// Read and parse an env file
    pub fn load(path: &Path) -> ZeroopsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ZeroopsError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.vars
    }
}

impl FromIterator<(String, String)> for EnvMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}
