//! Deploy Module
//!
//! Ships a docker-compose application to the current target.
//!
//! ## Structure
//!
//! - `options` - Per-invocation inputs (`DeployOptions`)
//! - `result` - Result types (`DeployResult`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use zeroops::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(store, executor, layout);
//! let result = use_case.execute(&DeployOptions::new("web"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployResult;
pub use use_case::DeployUseCase;
