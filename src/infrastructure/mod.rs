//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - State directory and atomic local writes
//! - `repositories/` - Filesystem target store
//! - `remote/` - ssh/scp remote executor
//! - `template` - Manifest renderer

pub mod fs;
pub mod remote;
pub mod repositories;
pub mod template;

// Re-export for convenience
pub use remote::{SshExecutor, SshOptions};
pub use repositories::FsTargetStore;
pub use template::{RenderMode, TemplateRenderer};
