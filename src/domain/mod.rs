//! Domain Layer
//!
//! The decision logic of nua-deploy, without direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Catalog entries, parsed app configs, deployment documents, plans
//! - `value_objects/` - Immutable value types (Target, AppSelector, Toolchain, CommandSpec)
//! - `services/` - Catalog lookup, descriptor building, execution routing
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Processes and files are reached only through ports
//! 2. **Explicit inputs** - The resolved `Target` is passed in, never read from globals
//! 3. **Ports & Adapters** - Every external effect has a fake for tests

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
