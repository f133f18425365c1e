//! Domain Entities

mod app_config;
mod app_entry;
mod descriptor;
mod plan;

pub use app_config::AppConfig;
pub use app_entry::AppEntry;
pub use descriptor::{DeploymentDescriptor, DeploymentDocument};
pub use plan::{Plan, Step};
