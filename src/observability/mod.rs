//! Tracing bootstrap helpers for applications embedding the client.

#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with sensible defaults for the A2UI client
///
/// This sets up:
/// - Console output with timestamps
/// - Environment-based filtering (RUST_LOG environment variable)
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "tracing")]
/// # {
/// use a2ui_client::observability;
///
/// // Initialize with default settings
/// observability::init_tracing();
///
/// // Or with custom environment filter
/// observability::init_tracing_with_filter("a2ui_client=debug");
/// # }
/// ```
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    init_tracing_with_filter("a2ui_client=info");
}

/// Initialize tracing with a custom filter string
///
/// # Arguments
///
/// * `filter` - Environment filter string (e.g., "a2ui_client=debug")
#[cfg(feature = "tracing")]
pub fn init_tracing_with_filter(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
