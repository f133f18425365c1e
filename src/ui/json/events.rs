//! Shared JSON event types for consistent CLI output.
//!
//! Engine events are mapped onto flat objects with an `event` tag so a CI job
//! can follow progress line by line.

use nua_deploy::domain::entities::Step;
use nua_deploy::domain::ports::EngineEvent;
use serde::Serialize;
use serde_json::{json, Value};

/// Event emitted when an error aborts a command.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            app: None,
        }
    }

    pub fn with_app(mut self, app: Option<&str>) -> Self {
        self.app = app.map(str::to_string);
        self
    }
}

/// Event emitted for a non-fatal settings warning.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub key: String,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&nua_deploy::config::ConfigWarning> for WarningEvent {
    fn from(w: &nua_deploy::config::ConfigWarning) -> Self {
        Self {
            event: "warning",
            key: w.key.clone(),
            file: w.file.display().to_string(),
            line: w.line,
            suggestion: w.suggestion.clone(),
        }
    }
}

/// JSON object for a plan step
pub fn step_json(step: &Step) -> Value {
    match step {
        Step::Run(command) => json!({
            "kind": "run",
            "command": command.to_shell_string(),
            "cwd": command.cwd().map(|p| p.display().to_string()),
        }),
        Step::Transfer(spec) => json!({
            "kind": "transfer",
            "source": spec.source_display(),
            "destination": spec.destination_display(),
            "cwd": spec.cwd.as_ref().map(|p| p.display().to_string()),
        }),
        Step::RemoteRun { remote, command } => json!({
            "kind": "remote_run",
            "remote": remote.to_string(),
            "command": command.to_shell_string(),
        }),
    }
}

/// JSON object for an engine event
pub fn engine_event_json(event: &EngineEvent) -> Value {
    match event {
        EngineEvent::Started {
            operation,
            host,
            apps,
        } => json!({
            "event": "start",
            "command": operation.as_str(),
            "version": env!("CARGO_PKG_VERSION"),
            "host": host,
            "apps": apps,
        }),
        EngineEvent::BuildStarted { index, total, id } => json!({
            "event": "build_started",
            "index": index,
            "total": total,
            "app": id,
        }),
        EngineEvent::BuildFinished { id } => json!({
            "event": "build_finished",
            "app": id,
        }),
        EngineEvent::DescriptorResolved { id, descriptor } => json!({
            "event": "descriptor",
            "app": id,
            "image": descriptor.image,
            "domain": descriptor.domain,
        }),
        EngineEvent::DocumentWritten { path, site_count } => json!({
            "event": "document_written",
            "path": path.display().to_string(),
            "sites": site_count,
        }),
        EngineEvent::StepStarted { step, dry_run } => json!({
            "event": "step",
            "dry_run": dry_run,
            "step": step_json(step),
        }),
        EngineEvent::Completed { operation, count } => json!({
            "event": "complete",
            "command": operation.as_str(),
            "success": true,
            "count": count,
        }),
    }
}
