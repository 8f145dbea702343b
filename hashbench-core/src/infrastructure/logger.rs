use env_logger::{Builder, Env};

/// Install `env_logger` with `default_level`; `RUST_LOG` takes precedence.
///
/// Returns `false` if a logger was already installed.
pub fn init_logging(default_level: &str) -> bool {
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}
