//! Logging setup and module-gated logging macros.
//!
//! Modules opt in by declaring a flag next to their imports:
//! ```ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_debug, log_info, log_warn};
//!
//! log_info!("evaluated {} readings", 12);
//! ```

use env_logger::{Builder, Env};

const DEFAULT_FILTER: &str = "info";

fn builder(env: Env<'_>) -> Builder {
    Builder::from_env(env.default_filter_or(DEFAULT_FILTER))
}

/// Initialise `env_logger` from `RUST_LOG`, falling back to `info` when it
/// is unset.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = builder(Env::default()).try_init();
}

/// Info log, emitted only when the calling module sets `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn log, emitted only when the calling module sets `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Debug log, emitted only when the calling module sets `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}
