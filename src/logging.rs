//! Logger setup for native and web builds.

/// Install the platform logger at `level`.
///
/// Native builds use `env_logger` (`RUST_LOG` still overrides per module);
/// web builds log to the browser console and install the panic hook.
/// Calling this more than once keeps the first logger.
pub fn init(level: log::LevelFilter) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let result = env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .try_init();
        if result.is_err() {
            log::debug!("Logger already initialized");
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if let Some(level) = level.to_level() {
            if console_log::init_with_level(level).is_err() {
                log::debug!("Logger already initialized");
            }
        }
    }
}
