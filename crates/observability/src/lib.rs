//! Tracing/logging setup shared by the pantry binaries.
//!
//! Library crates only emit through `tracing` macros; installing a subscriber
//! is left to the process entry point via [`init`].

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, output format).
pub mod tracing;
