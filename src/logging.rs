//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::filter::EnvFilter;

/// Install a stderr `fmt` subscriber filtered by `directive`.
///
/// Falls back to `info` when the directive does not parse. Installing twice
/// is a no-op.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init("debug");
        init("not a [valid directive");
        tracing::info!("still logging");
    }
}
