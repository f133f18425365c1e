//! Value Objects
//!
//! Immutable types compared by value.

mod app_selector;
mod command;
mod target;
mod toolchain;

pub use app_selector::AppSelector;
pub use command::{shell_quote, CommandSpec, RemoteAddress, TransferKind, TransferSpec};
pub use target::{
    Target, TargetOverrides, DEFAULT_APPS_DIR, DEFAULT_HOST, ENV_APPS_ROOT, ENV_DOMAIN, ENV_HOST,
    LOCALHOST,
};
pub use toolchain::Toolchain;
