//! Process Runner
//!
//! Runs `CommandSpec`s as child processes with inherited stdio, so tool
//! output streams straight to the user's terminal.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::CommandRunner;
use crate::domain::value_objects::CommandSpec;
use crate::error::{NuaError, NuaResult};

/// Runs commands on this machine and waits for them
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner {
    quiet: bool,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard child stdout (used in JSON mode so NDJSON output stays clean)
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandSpec) -> NuaResult<()> {
        let mut cmd = Command::new(command.program());
        cmd.args(command.arguments()).stdin(Stdio::inherit());
        if let Some(cwd) = command.cwd() {
            cmd.current_dir(cwd);
        }

        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        debug!(command = %command.to_shell_string(), cwd = ?command.cwd(), "spawning");
        let status = cmd.status().map_err(|source| NuaError::CommandSpawn {
            command: command.to_shell_string(),
            source,
        })?;

        if !status.success() {
            debug!(code = ?status.code(), "command exited unsuccessfully");
            return Err(NuaError::CommandFailed {
                command: command.to_shell_string(),
                code: status.code(),
            });
        }
        Ok(())
    }
}
