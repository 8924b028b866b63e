#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Initialize logging for native and WebAssembly builds.
///
/// Native builds log at `Info` (or `Debug` when `debug_enabled`), and an
/// explicit `RUST_LOG` overrides that. WebAssembly builds log to the browser
/// console.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        // A second call fails because a logger is already installed.
        if console_log::init_with_level(level).is_ok() {
            log::info!("WASM logger initialized at {level:?} level");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level:?} level");
        }
    }
}
