//! Terminal and NDJSON output for the `nua-deploy` binary.

pub mod context;
pub mod error;
pub mod json;
pub mod sink;
pub mod terminal;
pub mod theme;
