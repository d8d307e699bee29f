//! Local File System Helpers

mod atomic;
mod home;

pub use atomic::{atomic_write, create_private_dir};
pub use home::{zeroops_home_dir, STATE_DIR_NAME, ZEROOPS_HOME_VAR};
