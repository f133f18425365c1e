//! Command Runner Port
//!
//! Runs a program on this machine. Implementations are the only place
//! (together with `RemoteExecutor`) allowed to spawn processes.

use crate::domain::value_objects::CommandSpec;
use crate::error::NuaResult;

/// Local process execution
///
/// Implementations:
/// - `ProcessRunner` - spawns the program with inherited stdio
/// - recording fakes in tests
pub trait CommandRunner {
    /// Run `command` to completion.
    ///
    /// Output goes to the terminal. A non-zero exit is reported as
    /// `NuaError::CommandFailed`.
    fn run(&self, command: &CommandSpec) -> NuaResult<()>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: &CommandSpec) -> NuaResult<()> {
        (**self).run(command)
    }
}
