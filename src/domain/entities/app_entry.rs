//! App entry entity - one deployable application of the catalog.

use crate::error::{NuaError, NuaResult};

/// A deployable application and its externally visible subdomain label.
///
/// The id is never empty. Entries are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    id: String,
    display_hostname: Option<String>,
}

impl AppEntry {
    /// Create an entry without a hostname override
    pub fn new(id: impl Into<String>) -> NuaResult<Self> {
        Self::build(id.into(), None)
    }

    /// Create an entry whose domain uses `hostname` instead of the image id
    pub fn with_hostname(id: impl Into<String>, hostname: impl Into<String>) -> NuaResult<Self> {
        Self::build(id.into(), Some(hostname.into()))
    }

    fn build(id: String, hostname: Option<String>) -> NuaResult<Self> {
        let id = id.trim().to_string();
        if id.is_empty() {
            return Err(NuaError::InvalidAppEntry {
                message: "application id must not be empty".to_string(),
            });
        }
        if id.contains(['/', '\\']) || id == "." || id == ".." {
            return Err(NuaError::InvalidAppEntry {
                message: format!("application id '{}' must be a plain directory name", id),
            });
        }

        let display_hostname = hostname
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty());

        Ok(Self {
            id,
            display_hostname,
        })
    }

    /// Catalog identifier (also the directory name under the apps root)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Subdomain label override, if any
    pub fn display_hostname(&self) -> Option<&str> {
        self.display_hostname.as_deref()
    }
}
