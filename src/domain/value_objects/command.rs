//! Command and transfer descriptions shaped by the execution router.
//!
//! These are plain data: nothing here spawns a process.

use std::fmt;
use std::path::{Path, PathBuf};

/// A program invocation: program path, arguments and optional working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Command line safe to hand to a POSIX shell (each word quoted when needed)
    pub fn to_shell_string(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_string())
    }
}

/// Quote a word for a POSIX shell, leaving plain words untouched
pub fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@,+%".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', "'\\''"))
    }
}

/// `user@host` login on a remote machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAddress {
    pub user: String,
    pub host: String,
}

impl RemoteAddress {
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
        }
    }

    /// `user@host:path` as understood by rsync/scp
    pub fn location(&self, path: &str) -> String {
        format!("{}:{}", self, path)
    }
}

impl fmt::Display for RemoteAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.user.is_empty() {
            write!(f, "{}", self.host)
        } else {
            write!(f, "{}@{}", self.user, self.host)
        }
    }
}

/// What is being shipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    /// A directory tree, copied as a subtree into the destination directory
    Directory,
    /// A single file, copied to the destination path
    File,
}

/// A copy from the local machine to a remote staging path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSpec {
    pub kind: TransferKind,
    /// Local source, relative to `cwd` when set
    pub source: PathBuf,
    /// Local working directory the source is resolved from
    pub cwd: Option<PathBuf>,
    pub remote: RemoteAddress,
    /// Remote destination path (a directory for `Directory` transfers)
    pub destination: String,
}

impl TransferSpec {
    pub fn source_display(&self) -> String {
        self.source.display().to_string()
    }

    pub fn destination_display(&self) -> String {
        self.remote.location(&self.destination)
    }
}
