//! nua-deploy - build and deploy orchestration for Nua applications
//!
//! Resolves which applications to act on, where they run (this machine or a
//! remote host over ssh), and what the orchestrator receives: a JSON
//! deployment document with one `{image, domain}` descriptor per application.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildResult, ConfigResolver, DeployResult, Engine, EngineOptions};
pub use config::Settings;
pub use domain::entities::{AppConfig, AppEntry, DeploymentDescriptor, DeploymentDocument};
pub use domain::services::{AppCatalog, CatalogMissPolicy, DescriptorBuilder, ExecutionRouter};
pub use domain::value_objects::{AppSelector, Target, Toolchain};
pub use error::{NuaError, NuaResult};
