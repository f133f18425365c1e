//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Engine` - Build and deploy workflows
//! - `ConfigResolver` - Locates and parses per-application configs

pub mod config_resolver;
pub mod engine;

pub use config_resolver::{candidate_paths, ConfigResolver, CONFIG_FILE_NAME};
pub use engine::{BuildResult, DeployResult, Engine, EngineOptions};
