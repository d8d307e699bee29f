//! Domain Layer
//!
//! ## Structure
//!
//! - `target` - Target value object, URI parsing, name rules
//! - `env_file` - `.env` mapping
//! - `layout` - Remote paths and every remote command string
//! - `ports/` - Interface definitions for infrastructure
//!
//! Nothing here spawns processes or talks to the network; all remote
//! interaction goes through [`ports::RemoteExecutor`].

pub mod env_file;
pub mod layout;
pub mod ports;
pub mod target;

pub use env_file::EnvMapping;
pub use layout::{shell_quote, RemoteLayout};
pub use target::{parse_target_uri, validate_name, Target};
