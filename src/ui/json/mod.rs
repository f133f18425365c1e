//! JSON output utilities for CLI commands.
//!
//! This module provides:
//! - Shared event types for consistent NDJSON output (`events`)
//! - Helper functions for emitting NDJSON events
//!
//! ## Usage
//!
//! ```ignore
//! use crate::ui::json::{emit_event, events::*};
//!
//! emit_event(&ErrorEvent::new("deploy", "config_not_found", "..."))?;
//! ```

pub mod events;

use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// Write an event that is not the command's result.
///
/// Progress, warnings and error reports must not turn a closed stdout into a
/// second failure, so write errors are logged and reported as `false`.
pub fn write_event_logged<T: Serialize>(out: &mut impl Write, event: &T) -> bool {
    match write_event(out, event) {
        Ok(()) => true,
        Err(error) => {
            debug!(%error, "dropped NDJSON event");
            false
        }
    }
}

/// `write_event_logged` to stdout
pub fn emit_event_logged<T: Serialize>(event: &T) -> bool {
    write_event_logged(&mut io::stdout().lock(), event)
}
