//! Subcommand handlers for the `nua-deploy` binary.

mod apps;
mod build;
mod deploy;
mod render;
mod session;

use anyhow::Result;
use nua_deploy::presentation::{Cli, Commands};

use crate::ui::context::UiContext;

pub use session::Session;

pub fn dispatch(cli: &Cli, ui: &UiContext) -> Result<()> {
    let session = Session::load(cli, ui)?;

    match &cli.command {
        Commands::Build { apps } => build::cmd_build(&session, &apps.selector()),
        Commands::Deploy { apps, dry_run } => {
            deploy::cmd_deploy(&session, &apps.selector(), *dry_run)
        }
        Commands::All { apps, dry_run } => deploy::cmd_all(&session, &apps.selector(), *dry_run),
        Commands::Render { apps } => render::cmd_render(&session, &apps.selector()),
        Commands::Apps => apps::cmd_apps(&session),
    }
}
