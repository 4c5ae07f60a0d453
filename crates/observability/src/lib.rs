//! Tracing and logging setup shared by the binaries and black-box tests.

/// Initialize process-wide tracing/logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}

pub use crate::tracing::LogFormat;

/// Subscriber configuration (filters, output format).
pub mod tracing;
