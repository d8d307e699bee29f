//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod events;
pub mod remote_executor;
pub mod target_repository;

pub use events::{EventSink, NoopEventSink, OpsEvent};
pub use remote_executor::{upload_via_staging, RemoteExecutor};
pub use target_repository::TargetRepository;
