//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the engine with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates the engine with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{AppsArg, Cli, ColorWhen, Commands};
pub use factory::{create_engine, ConcreteEngine};
