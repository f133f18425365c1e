//! Domain Services
//!
//! Stateless logic operating on entities and value objects.

mod catalog;
mod descriptor_builder;
mod execution_router;

pub use catalog::{AppCatalog, CatalogMissPolicy};
pub use descriptor_builder::DescriptorBuilder;
pub use execution_router::{ExecutionMode, ExecutionRouter};
