//! Engine Results

use std::path::PathBuf;

use crate::domain::entities::DeploymentDocument;

/// Outcome of a build workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildResult {
    /// Application ids built, in order
    pub built: Vec<String>,
}

/// Outcome of a deploy workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployResult {
    /// The assembled document
    pub document: DeploymentDocument,
    /// Where the document was written (`None` in dry-run mode)
    pub document_path: Option<PathBuf>,
}

impl DeployResult {
    pub fn site_count(&self) -> usize {
        self.document.len()
    }
}
