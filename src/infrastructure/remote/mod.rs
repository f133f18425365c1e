//! Remote Execution
//!
//! `RemoteExecutor` implementations. The only transport is rsync/ssh.

mod ssh;

pub use ssh::SshExecutor;
