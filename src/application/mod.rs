//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on the Domain layer (target, layout, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TargetsUseCase` - Register, select and remove targets
//! - `DeployUseCase` - Render, upload and bring up an app
//! - `ProxyUseCase` - Install and reload nginx site fragments

pub mod deploy;
pub mod proxy;
pub mod targets;

pub use deploy::{DeployOptions, DeployResult, DeployUseCase};
pub use proxy::{ProxyOptions, ProxyUseCase};
pub use targets::{TargetListing, TargetsUseCase};
