//! Atomic local writes
//!
//! Content goes to a temp file in the destination directory, then is
//! renamed over the target, so readers never observe a half-written file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ZeroopsError, ZeroopsResult};

/// Write `content` to `path` atomically, creating parent directories.
///
/// `mode` sets unix permission bits on the new file and is ignored
/// elsewhere.
pub fn atomic_write(path: &Path, content: &[u8], mode: Option<u32>) -> ZeroopsResult<()> {
    let write_failed = |source: std::io::Error| ZeroopsError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_failed)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_failed)?;
    tmp.write_all(content).map_err(write_failed)?;
    tmp.as_file().sync_all().map_err(write_failed)?;

    #[cfg(unix)]
    if let Some(mode) = mode {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(mode))
            .map_err(write_failed)?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    tmp.persist(path).map_err(|e| write_failed(e.error))?;
    Ok(())
}

/// Create a directory tree, restricting the leaf to the owner on unix.
pub fn create_private_dir(path: &Path) -> ZeroopsResult<()> {
    let write_failed = |source: std::io::Error| ZeroopsError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(write_failed)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))
            .map_err(write_failed)?;
    }
    Ok(())
}
