//! Logging support.
//!
//! This module re-exports the `tracing` event macros used by the library when
//! the `tracing` feature is enabled, and provides no-op stand-ins when it's
//! disabled.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing::Level;

    /// Installs a formatting subscriber that writes to stderr.  Only the first
    /// call has any effect.
    pub fn init_tracing(verbose: bool) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let level = if verbose { Level::TRACE } else { Level::INFO };
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .try_init();
        });
    }

    pub use tracing::{debug, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing(_verbose: bool) {
        // No-op when tracing is disabled
    }

    // The arguments are still type-checked so that builds with and without
    // the feature accept the same call sites.
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __simplegraph_log {
        ($($arg:tt)*) => {{
            if false {
                ::std::mem::drop(::std::format!($($arg)*));
            }
        }};
    }

    pub use crate::__simplegraph_log as debug;
    pub use crate::__simplegraph_log as trace;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
