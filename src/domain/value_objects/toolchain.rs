//! Toolchain layout - where the Nua executables and staging paths live.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_NUA_ENV: &str = "/home/nua/env";
pub const DEFAULT_REMOTE_APPS_DIR: &str = "/tmp/nua-apps";
pub const DEFAULT_DOCUMENT_PATH: &str = "/tmp/nua-deployment.json";
pub const DEFAULT_SSH_USER: &str = "nua";
pub const DEFAULT_UPLOAD_USER: &str = "root";

/// Fixed paths and logins used to shape build and deploy commands.
///
/// The same layout is assumed on the local machine and on remote hosts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Toolchain {
    /// Virtualenv holding `bin/nua-build` and `bin/nua-orchestrator`
    pub nua_env: PathBuf,
    /// Remote staging directory for application sources
    pub remote_apps_dir: String,
    /// Staging path of the deployment document (local and remote)
    pub document_path: PathBuf,
    /// Login used for source sync and remote commands
    pub ssh_user: String,
    /// Login used to upload the deployment document
    pub upload_user: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            nua_env: PathBuf::from(DEFAULT_NUA_ENV),
            remote_apps_dir: DEFAULT_REMOTE_APPS_DIR.to_string(),
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            ssh_user: DEFAULT_SSH_USER.to_string(),
            upload_user: DEFAULT_UPLOAD_USER.to_string(),
        }
    }
}

impl Toolchain {
    pub fn nua_build(&self) -> PathBuf {
        self.bin("nua-build")
    }

    pub fn nua_orchestrator(&self) -> PathBuf {
        self.bin("nua-orchestrator")
    }

    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    /// Remote staging directory without trailing slashes
    pub fn staging_dir(&self) -> &str {
        self.remote_apps_dir.trim_end_matches('/')
    }

    /// Reject layouts that would stage sources into the remote root
    pub fn validate(&self) -> Result<(), String> {
        if self.staging_dir().trim().is_empty() {
            return Err(format!(
                "toolchain.remote_apps_dir must name a directory other than '/', got {:?}",
                self.remote_apps_dir
            ));
        }
        Ok(())
    }

    fn bin(&self, name: &str) -> PathBuf {
        self.nua_env.join("bin").join(name)
    }
}
