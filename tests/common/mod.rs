//! Common test utilities for nua-deploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories and a fake
//!   Nua toolchain
//! - Fixtures: Reusable test content constants

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
