use nua_deploy::NuaError;

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event_logged, events::ErrorEvent};
use crate::ui::theme::{colors, paint, Icon};

/// Hint printed under an error, when one helps
fn help_for(err: &NuaError) -> Option<String> {
    match err {
        NuaError::UnknownApplication { .. } => Some(
            "Run 'nua-deploy apps' to list known applications, or set \
             [catalog] unknown_apps = \"synthesize\" in nua-deploy.toml."
                .to_string(),
        ),
        NuaError::ConfigNotFound { searched, .. } => Some(format!(
            "Create one of:\n{}",
            searched
                .iter()
                .map(|p| format!("    {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n")
        )),
        NuaError::MissingMetadataId { .. } => {
            Some("Add an `id` to the [metadata] table of nua-config.toml.".to_string())
        }
        NuaError::BuildFailed { source, .. } => help_for(source),
        NuaError::CommandSpawn { .. } => {
            Some("Check that the Nua toolchain is installed (see [toolchain] nua_env).".to_string())
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let mut out = format!(
        "{} {}",
        Icon::Error.render(color, unicode),
        paint(&err.to_string(), colors::ERROR, color)
    );

    if let Some(help) = err.downcast_ref::<NuaError>().and_then(help_for) {
        out.push('\n');
        out.push_str(&paint(&help, colors::DIM, color));
    }
    out
}

pub fn print_error(err: &anyhow::Error, command: &str, ui: &UiContext) {
    if ui.json {
        let (code, app) = match err.downcast_ref::<NuaError>() {
            Some(e) => (e.code(), e.app_id()),
            None => ("error", None),
        };
        emit_event_logged(&ErrorEvent::new(command, code, err.to_string()).with_app(app));
        return;
    }

    eprintln!("{}", format_error(err, ui.color, ui.unicode));
}
