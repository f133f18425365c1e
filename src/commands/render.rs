use std::sync::Arc;

use anyhow::Result;
use nua_deploy::application::EngineOptions;
use nua_deploy::domain::ports::NoopEventSink;
use nua_deploy::domain::value_objects::AppSelector;
use nua_deploy::presentation::create_engine;

use crate::commands::Session;
use crate::ui::json::emit_event;

/// Print the deployment document. Nothing is written or executed.
pub fn cmd_render(session: &Session, selector: &AppSelector) -> Result<()> {
    let engine = create_engine(
        &session.settings,
        EngineOptions::new(),
        Arc::new(NoopEventSink),
        session.ui.json,
    )?;
    let document = engine.render(&session.target, selector)?;

    if session.ui.json {
        emit_event(&serde_json::json!({
            "event": "document",
            "host": session.target.host(),
            "document": document,
        }))?;
    } else {
        println!("{}", document.to_json_pretty()?);
    }
    Ok(())
}
