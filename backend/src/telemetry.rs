//! Structured logging set-up.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global JSON subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` or `info`
/// depending on `debug`.
///
/// # Errors
/// Returns [`std::io::Error`] when a global subscriber is already installed,
/// since nothing would be logged through the new one.
pub fn init_tracing(debug: bool) -> std::io::Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .json()
        .try_init()
        .map_err(|e| std::io::Error::other(format!("tracing init failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_reports_error() {
        // The first call may already fail if another test installed a subscriber.
        let _ = init_tracing(false);

        let err = init_tracing(true).expect_err("global subscriber already set");
        assert!(err.to_string().starts_with("tracing init failed"));
    }
}
