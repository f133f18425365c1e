use anyhow::Result;
use nua_deploy::domain::value_objects::AppSelector;

use crate::commands::Session;

pub fn cmd_build(session: &Session, selector: &AppSelector) -> Result<()> {
    let engine = session.engine(false)?;
    engine.build(&session.target, selector)?;
    Ok(())
}
