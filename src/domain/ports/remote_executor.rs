//! Remote Executor Port
//!
//! Abstracts the transport to a remote host: copying files there and running
//! a single command there.

use crate::domain::value_objects::{CommandSpec, RemoteAddress, TransferSpec};
use crate::error::NuaResult;

/// Remote transport primitives
///
/// Implementations:
/// - `SshExecutor` - rsync over ssh for copies, ssh for commands
/// - recording fakes in tests
pub trait RemoteExecutor {
    /// Copy a local file or directory to the remote staging path.
    ///
    /// Failures are reported as `NuaError::TransferFailed`.
    fn transfer(&self, spec: &TransferSpec) -> NuaResult<()>;

    /// Run `command` on `remote`, streaming output to the terminal.
    fn execute(&self, remote: &RemoteAddress, command: &CommandSpec) -> NuaResult<()>;
}

impl<T: RemoteExecutor + ?Sized> RemoteExecutor for &T {
    fn transfer(&self, spec: &TransferSpec) -> NuaResult<()> {
        (**self).transfer(spec)
    }

    fn execute(&self, remote: &RemoteAddress, command: &CommandSpec) -> NuaResult<()> {
        (**self).execute(remote, command)
    }
}
