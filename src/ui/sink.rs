//! Event sinks used by the binary.
//!
//! `ConsoleEventSink` prints progress lines, `JsonEventSink` prints one NDJSON
//! object per engine event.

use std::io::{self, Write};

use nua_deploy::domain::entities::Step;
use nua_deploy::domain::ports::{EngineEvent, EventSink, Operation};
use nua_deploy::infrastructure::{ProcessRunner, SshExecutor};
use tracing::debug;

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event_logged, events::engine_event_json};
use crate::ui::theme::{colors, paint, Icon};

pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }
}

impl EventSink for ConsoleEventSink {
    fn on_event(&self, event: EngineEvent) {
        if let Some(line) = render_event(&event, &self.ui) {
            write_line_logged(&mut io::stdout().lock(), &line);
        }
    }
}

pub struct JsonEventSink;

impl EventSink for JsonEventSink {
    fn on_event(&self, event: EngineEvent) {
        emit_event_logged(&engine_event_json(&event));
    }
}

/// Progress output is best-effort; a closed stdout is logged, not fatal
fn write_line_logged(out: &mut impl Write, line: &str) -> bool {
    match writeln!(out, "{}", line).and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(error) => {
            debug!(%error, "dropped progress line");
            false
        }
    }
}

/// Human-readable line for an event; `None` when nothing should be printed
pub fn render_event(event: &EngineEvent, ui: &UiContext) -> Option<String> {
    match event {
        EngineEvent::Started {
            operation,
            host,
            apps,
        } => {
            let verb = match operation {
                Operation::Build => "Building",
                Operation::Deploy => "Deploying",
            };
            Some(format!(
                "{} {} {} on {}",
                Icon::Progress.render(ui.color, ui.unicode),
                verb,
                plural(apps.len(), "application"),
                paint(host, colors::INFO, ui.color),
            ))
        }
        EngineEvent::BuildStarted { index, total, id } => Some(format!(
            "[{}/{}] {}",
            index + 1,
            total,
            paint(id, colors::INFO, ui.color)
        )),
        EngineEvent::BuildFinished { .. } => None,
        EngineEvent::DescriptorResolved { id, descriptor } => (ui.verbose > 0).then(|| {
            format!(
                "  {} {}: {} at {}",
                Icon::Arrow.render(ui.color, ui.unicode),
                id,
                descriptor.image,
                descriptor.domain
            )
        }),
        EngineEvent::DocumentWritten { path, site_count } => Some(format!(
            "{} Wrote {} to {}",
            Icon::Success.render(ui.color, ui.unicode),
            plural(*site_count, "site"),
            path.display()
        )),
        EngineEvent::StepStarted { step, dry_run } => {
            let line = describe_step(step);
            let line = if *dry_run {
                format!("[dry-run] {}", line)
            } else {
                format!("{}...", line)
            };
            Some(paint(&line, colors::DIM, ui.color))
        }
        EngineEvent::Completed { operation, count } => {
            let verb = match operation {
                Operation::Build => "Built",
                Operation::Deploy => "Deployed",
            };
            Some(format!(
                "{} {} {}",
                Icon::Success.render(ui.color, ui.unicode),
                verb,
                plural(*count, "application")
            ))
        }
    }
}

/// `Running "<command>" ...` description of a plan step
pub fn describe_step(step: &Step) -> String {
    match step {
        Step::Run(command) => match command.cwd() {
            Some(cwd) => format!("Running \"{}\" locally in \"{}\"", command, cwd.display()),
            None => format!("Running \"{}\" locally", command),
        },
        Step::Transfer(spec) => {
            let rsync = SshExecutor::<ProcessRunner>::rsync_command(spec);
            match rsync.cwd() {
                Some(cwd) => format!("Running \"{}\" locally in \"{}\"", rsync, cwd.display()),
                None => format!("Running \"{}\" locally", rsync),
            }
        }
        Step::RemoteRun { remote, command } => {
            format!("Running \"{}\" on {}", command, remote)
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
