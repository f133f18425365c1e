//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod engine_events;
pub mod file_system;
pub mod remote_executor;

pub use command_runner::CommandRunner;
pub use engine_events::{EngineEvent, EventSink, NoopEventSink, Operation};
pub use file_system::{FileSystem, FsError, FsResult};
pub use remote_executor::RemoteExecutor;
