//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system (`LocalFs`)
//! - `process` - Child process runner (`ProcessRunner`)
//! - `remote/` - rsync/ssh remote executor (`SshExecutor`)

pub mod fs;
pub mod process;
pub mod remote;

// Re-export for convenience
pub use fs::LocalFs;
pub use process::ProcessRunner;
pub use remote::SshExecutor;
