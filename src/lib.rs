// ============================================================================
// GANA LAUNDRY - FRONTEND SPA (RUST PURO + WASM)
// ============================================================================
// - Router: árbol de rutas anidadas, matcher, layouts con outlet, navegación
// - Host: History API + punto de montaje (navegador real o memoria)
// - Views: páginas placeholder (sin fetch ni persistencia)
// - State: store global reservado (sin reducers)
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod host;
pub mod logging;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;

pub use app::App;
pub use config::{AppConfig, CONFIG};
pub use error::{AppError, HostError, NoMatch, RouteSpecError};

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::CONFIG;
    use crate::host::web::{BrowserHistory, DomSurface};

    // Instancia global: vive lo mismo que la pestaña
    thread_local! {
        static APP: RefCell<Option<App<BrowserHistory, DomSurface>>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        crate::logging::init(&CONFIG);
        log::info!("🚀 {} - Rust Puro + WASM", CONFIG.app_name);

        // Rutas inválidas o mount ausente detienen el arranque
        let app = App::mount(&CONFIG).map_err(|e| {
            log::error!("❌ [MAIN] Arranque abortado: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
        app.start().map_err(|e| JsValue::from_str(&e.to_string()))?;

        APP.with(|cell| {
            *cell.borrow_mut() = Some(app);
        });
        Ok(())
    }
}
