//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ZeroopsError, ZeroopsResult};

use super::types::Config;

/// Name of the config file inside the state directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

pub fn config_path(state_dir: &Path) -> PathBuf {
    state_dir.join(CONFIG_FILE_NAME)
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ZeroopsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| ZeroopsError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    parse_with_warnings(path, &content)
}

pub(crate) fn parse_with_warnings(
    path: &Path,
    content: &str,
) -> ZeroopsResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ZeroopsError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `config.toml` from the state directory; a missing file means defaults
pub fn load_or_default(state_dir: &Path) -> ZeroopsResult<(Config, Vec<ConfigWarning>)> {
    let path = config_path(state_dir);
    if !path.exists() {
        return Ok((Config::default(), Vec::new()));
    }
    load_with_warnings(&path)
}

/// Apply environment variable overrides (ZEROOPS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // ZEROOPS_SSH
    if let Some(program) = var("ZEROOPS_SSH").filter(|v| !v.is_empty()) {
        config.ssh.program = program;
    }

    // ZEROOPS_SCP
    if let Some(program) = var("ZEROOPS_SCP").filter(|v| !v.is_empty()) {
        config.ssh.scp_program = program;
    }

    // ZEROOPS_STRICT_TEMPLATES
    if let Some(val) = var("ZEROOPS_STRICT_TEMPLATES") {
        config.template.strict = is_truthy(&val);
    }

    // ZEROOPS_SUDO
    if let Some(val) = var("ZEROOPS_SUDO") {
        config.remote.sudo = is_truthy(&val);
    }

    config
}

fn is_truthy(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0" && val != "no" && !val.is_empty()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deploy",
        "env_file",
        "template",
        "output",
        "cleanup_on_failure",
        "strict",
        "proxy",
        "conf",
        "remote",
        "apps_root",
        "sites_dir",
        "staging_dir",
        "sudo",
        "compose_command",
        "reload_command",
        "ssh",
        "program",
        "scp_program",
        "options",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
