use anyhow::Result;
use nua_deploy::domain::value_objects::AppSelector;

use crate::commands::Session;

pub fn cmd_deploy(session: &Session, selector: &AppSelector, dry_run: bool) -> Result<()> {
    let engine = session.engine(dry_run)?;
    engine.deploy(&session.target, selector)?;
    Ok(())
}

/// Build everything, then deploy. A dry run plans both phases without
/// executing either.
pub fn cmd_all(session: &Session, selector: &AppSelector, dry_run: bool) -> Result<()> {
    let engine = session.engine(dry_run)?;
    engine.all(&session.target, selector)?;
    Ok(())
}
