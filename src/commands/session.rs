//! Per-invocation state shared by every subcommand: settings, target and the
//! output context.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use nua_deploy::application::EngineOptions;
use nua_deploy::config::{self, ConfigWarning, Settings};
use nua_deploy::domain::ports::EventSink;
use nua_deploy::domain::value_objects::Target;
use nua_deploy::presentation::{create_engine, Cli, ConcreteEngine};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event_logged, events::WarningEvent};
use crate::ui::sink::{ConsoleEventSink, JsonEventSink};
use crate::ui::theme::{colors, paint, Icon};

pub struct Session {
    pub settings: Settings,
    pub target: Target,
    pub ui: UiContext,
}

impl Session {
    pub fn load(cli: &Cli, ui: &UiContext) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        Self::load_in(cli, ui, &cwd, |key| std::env::var(key).ok())
    }

    fn load_in(
        cli: &Cli,
        ui: &UiContext,
        cwd: &Path,
        get_env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let (settings, warnings) = config::load_or_default(cli.config.as_deref(), cwd, &get_env)?;
        for warning in &warnings {
            print_warning(warning, ui);
        }

        let target = Target::resolve_with(&cli.target_overrides(), &settings.target, cwd, get_env);

        Ok(Self {
            settings,
            target,
            ui: *ui,
        })
    }

    pub fn events(&self) -> Arc<dyn EventSink> {
        if self.ui.json {
            Arc::new(JsonEventSink)
        } else {
            Arc::new(ConsoleEventSink::new(self.ui))
        }
    }

    pub fn engine(&self, dry_run: bool) -> Result<ConcreteEngine> {
        let engine = create_engine(
            &self.settings,
            EngineOptions::new().with_dry_run(dry_run),
            self.events(),
            self.ui.json,
        )?;
        Ok(engine)
    }
}

fn print_warning(warning: &ConfigWarning, ui: &UiContext) {
    if ui.json {
        emit_event_logged(&WarningEvent::from(warning));
        return;
    }

    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut message = format!("Unknown setting '{}' in {}", warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        message.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }

    eprintln!(
        "{} {}",
        Icon::Warning.render(ui.color, ui.unicode),
        paint(&message, colors::WARNING, ui.color)
    );
}
