// ============================================================================
// LOGGING - Inicialización del logger según AppConfig
// ============================================================================

use crate::config::AppConfig;

fn max_level(config: &AppConfig) -> log::LevelFilter {
    if config.enable_logging {
        config.log_level().to_level_filter()
    } else {
        log::LevelFilter::Off
    }
}

/// En wasm32: panic hook + wasm_logger hacia la consola del navegador
#[cfg(target_arch = "wasm32")]
pub fn init(config: &AppConfig) {
    console_error_panic_hook::set_once();
    if config.enable_logging {
        wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    }
    log::set_max_level(max_level(config));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init(config: &AppConfig) {
    log::set_max_level(max_level(config));
}
