//! Target value object - where one invocation builds and deploys.
//!
//! Resolution order for each field (first non-empty value wins):
//! 1. Explicit CLI argument
//! 2. Environment variable (`NUA_HOST`, `NUA_DOMAIN`, `NUA_APPS_ROOT`)
//! 3. Settings file `[target]` table
//! 4. Built-in default

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Host that selects local execution
pub const LOCALHOST: &str = "localhost";

/// Built-in default host
pub const DEFAULT_HOST: &str = "c17.abilian.com";

/// Directory name of the default apps root (relative to the working directory)
pub const DEFAULT_APPS_DIR: &str = "nua-apps";

pub const ENV_HOST: &str = "NUA_HOST";
pub const ENV_DOMAIN: &str = "NUA_DOMAIN";
pub const ENV_APPS_ROOT: &str = "NUA_APPS_ROOT";

/// Partially specified target (from CLI flags or the settings file)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TargetOverrides {
    pub host: Option<String>,
    pub domain: Option<String>,
    pub apps_root: Option<PathBuf>,
}

/// Resolved host/domain/apps-root triple for one invocation.
///
/// Constructed once, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    host: String,
    domain: String,
    apps_root: PathBuf,
}

impl Target {
    pub fn new(
        host: impl Into<String>,
        domain: impl Into<String>,
        apps_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            host: host.into(),
            domain: domain.into(),
            apps_root: apps_root.into(),
        }
    }

    /// Resolve from the process environment
    pub fn resolve(cli: &TargetOverrides, settings: &TargetOverrides, cwd: &Path) -> Self {
        Self::resolve_with(cli, settings, cwd, |key| std::env::var(key).ok())
    }

    /// Resolve with an injected environment lookup
    pub fn resolve_with(
        cli: &TargetOverrides,
        settings: &TargetOverrides,
        cwd: &Path,
        get_env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let host = first_non_empty([
            cli.host.clone(),
            get_env(ENV_HOST),
            settings.host.clone(),
        ])
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

        // The domain falls back to the resolved host, not to a fixed value.
        let domain = first_non_empty([
            cli.domain.clone(),
            get_env(ENV_DOMAIN),
            settings.domain.clone(),
        ])
        .unwrap_or_else(|| host.clone());

        let apps_root = first_non_empty([
            cli.apps_root.as_ref().map(|p| p.display().to_string()),
            get_env(ENV_APPS_ROOT),
            settings.apps_root.as_ref().map(|p| p.display().to_string()),
        ])
        .map(PathBuf::from)
        .map(|p| if p.is_relative() { cwd.join(p) } else { p })
        .unwrap_or_else(|| cwd.join(DEFAULT_APPS_DIR));

        Self {
            host,
            domain,
            apps_root,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn apps_root(&self) -> &Path {
        &self.apps_root
    }

    /// Whether operations run on this machine rather than over ssh
    pub fn is_local(&self) -> bool {
        self.host == LOCALHOST
    }
}

fn first_non_empty<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
}
