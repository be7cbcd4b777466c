use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Human-readable logs on stderr; stdout carries test data.
///
/// `RUST_LOG` overrides the default `info` level. Calling twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
