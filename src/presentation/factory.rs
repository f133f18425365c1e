//! Engine Factory
//!
//! Creates the engine with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{Engine, EngineOptions};
use crate::config::Settings;
use crate::domain::ports::EventSink;
use crate::domain::services::ExecutionRouter;
use crate::error::NuaResult;
use crate::infrastructure::{LocalFs, ProcessRunner, SshExecutor};

/// Type alias for the engine running real processes against the local disk
pub type ConcreteEngine = Engine<ProcessRunner, SshExecutor<ProcessRunner>, LocalFs>;

/// Create an engine from settings.
///
/// `quiet` discards the stdout of spawned tools (JSON mode).
pub fn create_engine(
    settings: &Settings,
    options: EngineOptions,
    events: Arc<dyn EventSink>,
    quiet: bool,
) -> NuaResult<ConcreteEngine> {
    let runner = ProcessRunner::new().quiet(quiet);

    Ok(Engine::new(
        settings.catalog()?,
        ExecutionRouter::new(settings.toolchain.clone()),
        runner,
        SshExecutor::new(runner),
        LocalFs::new(),
    )
    .with_events(events)
    .with_options(options))
}
