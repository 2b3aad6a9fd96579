//! Logging bootstrap for the CLI client.
//!
//! The library itself only emits through the `log` facade; initialization is
//! the binary's job. Init is idempotent and never panics: a broken logger
//! must not take the application down.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Initialize stderr logging at `default_level`, overridable via `RUST_LOG`.
/// Repeated calls are no-ops.
pub fn init(default_level: &str) {
    let _ = LOGGER.get_or_try_init(|| {
        Logger::try_with_env_or_str(default_level)
            .map_err(|e| e.to_string())?
            .log_to_stderr()
            .start()
            .map_err(|e| e.to_string())
    });
}
