/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Stdout is reserved for the report, so logs never go there. Calling this twice, or from a
/// process that already has a global subscriber, is a no-op.
#[cfg(feature = "tracing")]
pub fn init_logging() {
	// crates.io
	use tracing_subscriber::{EnvFilter, fmt, prelude::*};

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
	let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

	let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}

/// No-op when the `tracing` feature is disabled.
#[cfg(not(feature = "tracing"))]
pub fn init_logging() {}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn init_logging_is_idempotent() {
		init_logging();
		init_logging();
	}
}
