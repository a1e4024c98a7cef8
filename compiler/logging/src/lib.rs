#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Simple logging utilities for the generator.
//!
//! Trace output is off by default and switched on either through the
//! `WRAPGEN_TRACE` environment variable or programmatically (e.g. from a
//! loaded configuration file).

use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable that switches trace output on.
pub const TRACE_ENV: &str = "WRAPGEN_TRACE";

static TRACE_FORCED: AtomicBool = AtomicBool::new(false);

/// Switch trace output on for the rest of the process.
pub fn enable_trace() { TRACE_FORCED.store(true, Ordering::Relaxed); }

/// Whether trace output is currently enabled.
pub fn trace_enabled() -> bool {
    TRACE_FORCED.load(Ordering::Relaxed) || std::env::var_os(TRACE_ENV).is_some()
}

/// Prints a trace message to stderr with module prefix.
pub fn trace(module: &str, msg: &str) {
    if trace_enabled() {
        eprintln!("[TRACE][{}] {}", module, msg);
    }
}
