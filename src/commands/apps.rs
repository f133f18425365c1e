use anyhow::Result;

use crate::commands::Session;
use crate::ui::json::emit_event;
use crate::ui::theme::{colors, paint};

pub fn cmd_apps(session: &Session) -> Result<()> {
    let catalog = session.settings.catalog()?;

    if session.ui.json {
        let apps: Vec<_> = catalog
            .entries()
            .iter()
            .map(|e| serde_json::json!({ "id": e.id(), "hostname": e.display_hostname() }))
            .collect();
        emit_event(&serde_json::json!({ "event": "apps", "apps": apps }))?;
        return Ok(());
    }

    let width = catalog
        .entries()
        .iter()
        .map(|e| e.id().len())
        .max()
        .unwrap_or(0);
    for entry in catalog.entries() {
        let hostname = match entry.display_hostname() {
            Some(hostname) => paint(hostname, colors::INFO, session.ui.color),
            None => paint("(image id)", colors::DIM, session.ui.color),
        };
        println!("{:<width$}  {}", entry.id(), hostname, width = width);
    }
    Ok(())
}
