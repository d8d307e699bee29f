//! Filesystem Target Store
//!
//! Layout under the state directory (`~/.zeroops`):
//!
//! ```text
//! contexts/<name>.yaml   host/user/key record, one per target
//! current-context        name of the selected target
//! .lock                  held exclusively while the store is mutated
//! ```

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ports::TargetRepository;
use crate::domain::target::{check_login_field, validate_name, Target};
use crate::error::{ZeroopsError, ZeroopsResult};
use crate::infrastructure::fs::{atomic_write, create_private_dir};

const CONTEXTS_DIR: &str = "contexts";
const CURRENT_FILE: &str = "current-context";
const LOCK_FILE: &str = ".lock";
const RECORD_EXTENSION: &str = "yaml";

/// On-disk record. Field order matches the `host:` / `user:` / `key:` lines
/// users edit by hand.
#[derive(Debug, Serialize, Deserialize)]
struct TargetRecord {
    host: String,
    user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
}

/// Exclusive store lock, released on drop
struct StoreLock {
    file: File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

pub struct FsTargetStore {
    root: PathBuf,
}

impl FsTargetStore {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn contexts_dir(&self) -> PathBuf {
        self.root.join(CONTEXTS_DIR)
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.contexts_dir()
            .join(format!("{}.{}", name, RECORD_EXTENSION))
    }

    fn current_path(&self) -> PathBuf {
        self.root.join(CURRENT_FILE)
    }

    fn lock(&self) -> ZeroopsResult<StoreLock> {
        let lock_path = self.root.join(LOCK_FILE);
        let lock_failed = |source: std::io::Error| ZeroopsError::Lock {
            path: lock_path.clone(),
            source,
        };

        create_private_dir(&self.root)?;
        let file = File::create(&lock_path).map_err(lock_failed)?;
        FileExt::lock_exclusive(&file).map_err(lock_failed)?;
        Ok(StoreLock { file })
    }

    fn parse_record(&self, name: &str, path: &Path, content: &str) -> ZeroopsResult<Target> {
        let invalid = |message: String| ZeroopsError::InvalidRecord {
            name: name.to_string(),
            path: path.to_path_buf(),
            message,
        };

        let record: TargetRecord =
            serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))?;

        if record.host.trim().is_empty() {
            return Err(invalid("required field 'host' is empty".to_string()));
        }
        if record.user.trim().is_empty() {
            return Err(invalid("required field 'user' is empty".to_string()));
        }
        check_login_field("host", &record.host).map_err(invalid)?;
        check_login_field("user", &record.user).map_err(invalid)?;

        Ok(Target {
            name: name.to_string(),
            host: record.host,
            user: record.user,
            key: record.key.filter(|k| !k.trim().is_empty()),
        })
    }
}

impl TargetRepository for FsTargetStore {
    fn save(&self, target: &Target) -> ZeroopsResult<()> {
        validate_name(&target.name, "context name")?;
        let path = self.record_path(&target.name);

        if target.host.is_empty() || target.user.is_empty() {
            return Err(ZeroopsError::InvalidRecord {
                name: target.name.clone(),
                path,
                message: "host and user must not be empty".to_string(),
            });
        }
        for (field, value) in [("host", &target.host), ("user", &target.user)] {
            check_login_field(field, value).map_err(|message| {
                ZeroopsError::InvalidRecord {
                    name: target.name.clone(),
                    path: path.clone(),
                    message,
                }
            })?;
        }

        let record = TargetRecord {
            host: target.host.clone(),
            user: target.user.clone(),
            key: target.key.clone(),
        };
        let content =
            serde_yaml_ng::to_string(&record).map_err(|e| ZeroopsError::InvalidRecord {
                name: target.name.clone(),
                path: path.clone(),
                message: e.to_string(),
            })?;

        let _lock = self.lock()?;
        create_private_dir(&self.contexts_dir())?;
        atomic_write(&path, content.as_bytes(), Some(0o600))?;
        debug!(name = %target.name, path = %path.display(), "saved context");
        Ok(())
    }

    fn load(&self, name: &str) -> ZeroopsResult<Target> {
        validate_name(name, "context name")?;
        let path = self.record_path(name);
        let content = fs::read_to_string(&path).map_err(|source| ZeroopsError::ReadFailed {
            path: path.clone(),
            source,
        })?;
        self.parse_record(name, &path, &content)
    }

    fn exists(&self, name: &str) -> bool {
        validate_name(name, "context name").is_ok() && self.record_path(name).is_file()
    }

    fn list(&self) -> ZeroopsResult<Vec<String>> {
        let dir = self.contexts_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(ZeroopsError::ReadFailed { path: dir, source }),
        };

        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == RECORD_EXTENSION))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().to_string()))
            .collect();
        names.sort();
        Ok(names)
    }

    fn remove(&self, name: &str) -> ZeroopsResult<bool> {
        validate_name(name, "context name")?;
        let _lock = self.lock()?;

        let path = self.record_path(name);
        match fs::remove_file(&path) {
            Ok(()) => debug!(name, "removed context"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => return Err(ZeroopsError::WriteFailed { path, source }),
        }

        if self.current_name()?.as_deref() != Some(name) {
            return Ok(false);
        }

        let current = self.current_path();
        match fs::remove_file(&current) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(ZeroopsError::WriteFailed {
                    path: current,
                    source,
                })
            }
        }
        debug!(name, "cleared current context");
        Ok(true)
    }

    fn current_name(&self) -> ZeroopsResult<Option<String>> {
        let path = self.current_path();
        match fs::read_to_string(&path) {
            Ok(content) => {
                let name = content.trim();
                Ok((!name.is_empty()).then(|| name.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ZeroopsError::ReadFailed { path, source }),
        }
    }

    fn set_current(&self, name: &str) -> ZeroopsResult<()> {
        validate_name(name, "context name")?;
        let _lock = self.lock()?;

        if !self.exists(name) {
            return Err(ZeroopsError::TargetNotFound {
                name: name.to_string(),
            });
        }

        atomic_write(&self.current_path(), name.as_bytes(), Some(0o600))?;
        debug!(name, "selected current context");
        Ok(())
    }
}
