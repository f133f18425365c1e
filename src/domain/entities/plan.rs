//! Execution plan produced by the execution router.

use crate::domain::value_objects::{CommandSpec, RemoteAddress, TransferSpec};

/// A single effect to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Run a command on this machine
    Run(CommandSpec),
    /// Copy a file or directory to a remote host
    Transfer(TransferSpec),
    /// Run a command on a remote host
    RemoteRun {
        remote: RemoteAddress,
        command: CommandSpec,
    },
}

impl Step {
    pub fn is_remote(&self) -> bool {
        !matches!(self, Step::Run(_))
    }
}

/// Ordered steps; executed one at a time, stopping at the first failure
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl IntoIterator for Plan {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
