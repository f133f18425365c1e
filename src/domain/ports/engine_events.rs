//! Engine Event Port
//!
//! Provides an observable interface for build and deploy operations.
//! Enables terminal progress, NDJSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::entities::{DeploymentDescriptor, Step};

/// Which workflow an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Build,
    Deploy,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Build => "build",
            Operation::Deploy => "deploy",
        }
    }
}

/// Event emitted during engine operations
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// Workflow started for the resolved application list
    Started {
        operation: Operation,
        host: String,
        apps: Vec<String>,
    },

    /// Build of one application started
    BuildStarted {
        index: usize,
        total: usize,
        id: String,
    },

    /// Build of one application finished successfully
    BuildFinished { id: String },

    /// Descriptor computed for one application
    DescriptorResolved {
        id: String,
        descriptor: DeploymentDescriptor,
    },

    /// Deployment document written to the local staging path
    DocumentWritten { path: PathBuf, site_count: usize },

    /// A plan step is about to run (or would run, in dry-run mode)
    StepStarted { step: Step, dry_run: bool },

    /// Workflow completed
    Completed { operation: Operation, count: usize },
}

/// Trait for receiving engine events
///
/// Implementations can be:
/// - Console sink: progress lines in the terminal
/// - JSON sink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait EventSink: Send + Sync {
    /// Handle an engine event
    fn on_event(&self, event: EngineEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn on_event(&self, _event: EngineEvent) {}
}
