//! Engine Module
//!
//! Drives the build and deploy workflows.
//!
//! ## Structure
//!
//! - `options` - Behaviour switches (`EngineOptions`)
//! - `result` - Result types (`BuildResult`, `DeployResult`)
//! - `use_case` - Core orchestration (`Engine`)
//!
//! ## Usage
//!
//! ```ignore
//! use nua_deploy::application::engine::Engine;
//!
//! let engine = Engine::new(catalog, router, runner, remote, fs);
//! engine.build_all(&target)?;
//! let result = engine.deploy_all(&target)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::EngineOptions;
pub use result::{BuildResult, DeployResult};
pub use use_case::Engine;
