//! Execution router - decides where an operation runs and shapes the
//! concrete commands for it.
//!
//! The router only produces a `Plan`; running it is the engine's job,
//! through the `CommandRunner` and `RemoteExecutor` ports.

use std::path::Path;

use crate::domain::entities::{AppEntry, Plan, Step};
use crate::domain::value_objects::{
    CommandSpec, RemoteAddress, Target, Toolchain, TransferKind, TransferSpec,
};

/// Where a target's operations execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Directly on this machine
    Local,
    /// Shipped to the given host over ssh
    Remote { host: String },
}

/// Plans build and deploy operations for a target
#[derive(Debug, Clone, Default)]
pub struct ExecutionRouter {
    toolchain: Toolchain,
}

impl ExecutionRouter {
    pub fn new(toolchain: Toolchain) -> Self {
        Self { toolchain }
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    pub fn mode(target: &Target) -> ExecutionMode {
        if target.is_local() {
            ExecutionMode::Local
        } else {
            ExecutionMode::Remote {
                host: target.host().to_string(),
            }
        }
    }

    /// Plan the build of one application.
    ///
    /// Local: `nua-build ./<id>` run from the apps root.
    /// Remote: sync `./<id>` into the remote staging dir, then
    /// `nua-build -vv <staging>/<id>` over ssh.
    pub fn plan_build(&self, target: &Target, entry: &AppEntry) -> Plan {
        let nua_build = self.toolchain.nua_build().display().to_string();
        let relative_source = format!("./{}", entry.id());

        match Self::mode(target) {
            ExecutionMode::Local => Plan::new(vec![Step::Run(
                CommandSpec::new(nua_build)
                    .arg(relative_source)
                    .current_dir(target.apps_root()),
            )]),
            ExecutionMode::Remote { host } => {
                let remote = RemoteAddress::new(&self.toolchain.ssh_user, host);
                let staging_dir = self.toolchain.staging_dir();

                Plan::new(vec![
                    Step::Transfer(TransferSpec {
                        kind: TransferKind::Directory,
                        source: relative_source.into(),
                        cwd: Some(target.apps_root().to_path_buf()),
                        remote: remote.clone(),
                        destination: format!("{}/", staging_dir),
                    }),
                    Step::RemoteRun {
                        remote,
                        command: CommandSpec::new(nua_build)
                            .arg("-vv")
                            .arg(format!("{}/{}", staging_dir, entry.id())),
                    },
                ])
            }
        }
    }

    /// Plan the hand-off of a written deployment document to the orchestrator.
    ///
    /// Local: `nua-orchestrator deploy <document>`.
    /// Remote: upload the document to the staging path, then run the
    /// orchestrator against the uploaded copy over ssh.
    pub fn plan_deploy(&self, target: &Target, document: &Path) -> Plan {
        let orchestrator = self.toolchain.nua_orchestrator().display().to_string();

        match Self::mode(target) {
            ExecutionMode::Local => Plan::new(vec![Step::Run(
                CommandSpec::new(orchestrator)
                    .arg("deploy")
                    .arg(document.display().to_string()),
            )]),
            ExecutionMode::Remote { host } => {
                let staged = self.toolchain.document_path.display().to_string();

                Plan::new(vec![
                    Step::Transfer(TransferSpec {
                        kind: TransferKind::File,
                        source: document.to_path_buf(),
                        cwd: None,
                        remote: RemoteAddress::new(&self.toolchain.upload_user, host.clone()),
                        destination: staged.clone(),
                    }),
                    Step::RemoteRun {
                        remote: RemoteAddress::new(&self.toolchain.ssh_user, host),
                        command: CommandSpec::new(orchestrator).arg("deploy").arg(staged),
                    },
                ])
            }
        }
    }
}
