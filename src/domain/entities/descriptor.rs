//! Deployment descriptor and the document handed to `nua-orchestrator`.

use serde::{Deserialize, Serialize};

use crate::error::NuaResult;

/// One application's entry in the deployment document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentDescriptor {
    /// Image identifier (`metadata.id` of the app config)
    pub image: String,
    /// Fully qualified domain the app is served on
    pub domain: String,
}

impl DeploymentDescriptor {
    pub fn new(image: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            domain: domain.into(),
        }
    }
}

/// The full artifact consumed by the orchestrator.
///
/// Site order is the order in which applications were resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeploymentDocument {
    site: Vec<DeploymentDescriptor>,
}

impl DeploymentDocument {
    pub fn new(site: Vec<DeploymentDescriptor>) -> Self {
        Self { site }
    }

    pub fn push(&mut self, descriptor: DeploymentDescriptor) {
        self.site.push(descriptor);
    }

    pub fn site(&self) -> &[DeploymentDescriptor] {
        &self.site
    }

    pub fn len(&self) -> usize {
        self.site.len()
    }

    pub fn is_empty(&self) -> bool {
        self.site.is_empty()
    }

    /// Pretty-printed JSON (2-space indentation)
    pub fn to_json_pretty(&self) -> NuaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> NuaResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl FromIterator<DeploymentDescriptor> for DeploymentDocument {
    fn from_iter<I: IntoIterator<Item = DeploymentDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
