//! SSH Executor
//!
//! Transfers go through `rsync -az -e ssh`, remote commands through
//! `ssh user@host '<command>'`. Both are delegated to a `CommandRunner`,
//! which keeps the exact argv observable in tests.

use tracing::debug;

use crate::domain::ports::{CommandRunner, RemoteExecutor};
use crate::domain::value_objects::{CommandSpec, RemoteAddress, TransferSpec};
use crate::error::{NuaError, NuaResult};

/// rsync/ssh implementation of `RemoteExecutor`
#[derive(Debug, Clone, Default)]
pub struct SshExecutor<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> SshExecutor<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// rsync invocation for a transfer.
    ///
    /// Directory sources are passed without a trailing slash, so the
    /// directory itself lands inside the destination.
    pub fn rsync_command(spec: &TransferSpec) -> CommandSpec {
        let source = spec.source_display();
        let command = CommandSpec::new("rsync")
            .args(["-az", "-e", "ssh"])
            .arg(source.trim_end_matches('/'))
            .arg(spec.destination_display());

        match &spec.cwd {
            Some(cwd) => command.current_dir(cwd),
            None => command,
        }
    }

    /// ssh invocation running `command` on `remote`
    pub fn ssh_command(remote: &RemoteAddress, command: &CommandSpec) -> CommandSpec {
        CommandSpec::new("ssh")
            .arg(remote.to_string())
            .arg(command.to_shell_string())
    }
}

impl<R: CommandRunner> RemoteExecutor for SshExecutor<R> {
    fn transfer(&self, spec: &TransferSpec) -> NuaResult<()> {
        let rsync = Self::rsync_command(spec);
        debug!(kind = ?spec.kind, destination = %spec.destination_display(), "transferring");
        self.runner.run(&rsync).map_err(|e| match e {
            NuaError::CommandFailed { .. } | NuaError::CommandSpawn { .. } => {
                NuaError::TransferFailed {
                    src: spec.source_display(),
                    dst: spec.destination_display(),
                    cause: e.to_string(),
                }
            }
            other => other,
        })
    }

    fn execute(&self, remote: &RemoteAddress, command: &CommandSpec) -> NuaResult<()> {
        debug!(remote = %remote, "executing over ssh");
        self.runner.run(&Self::ssh_command(remote, command))
    }
}
