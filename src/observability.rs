//! Structured logging for the evaluator, controlled by the `RUST_LOG`
//! environment variable.
//!
//! The crate itself never installs a global subscriber — that is a
//! host/application concern — but ships this convenience initializer for use
//! from the crate's own tests and examples.
//!
//! ## Log levels
//!
//! - `error!` — a fatal evaluation failure (sets `had_error`)
//! - `warn!` — a policy-gated warning (e.g. a WARN-status compiler-id match)
//! - `debug!` — entry/exit spans around `TARGET_PROPERTY` transitive descent

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with `RUST_LOG`-based filtering.
///
/// Default level is `warn` when `RUST_LOG` is unset.
///
/// # Panics
///
/// Panics if a subscriber has already been installed for this process.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Initialize tracing with an explicit filter string, bypassing `RUST_LOG`.
///
/// Useful for tests that want deterministic verbosity regardless of the
/// environment.
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
