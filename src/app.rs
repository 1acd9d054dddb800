// ============================================================================
// APP - Aplicación principal: rutas + navegador + store
// ============================================================================

use crate::config::AppConfig;
use crate::error::AppError;
use crate::host::{DisplaySurface, HistoryApi};
use crate::router::{NavOutcome, Navigator};
use crate::routes::app_routes;
use crate::state::Store;

#[cfg(target_arch = "wasm32")]
use crate::host::web::{install_listeners, BrowserHistory, DomSurface};

/// Aplicación principal
pub struct App<H, S> {
    navigator: Navigator<H, S>,
    store: Store,
}

impl<H: HistoryApi, S: DisplaySurface> App<H, S> {
    /// Crear aplicación sobre un host concreto. Falla si las rutas son inválidas.
    pub fn new(config: &AppConfig, history: H, surface: S) -> Result<Self, AppError> {
        let tree = app_routes(config)?;
        log::info!("🌳 [APP] {} rutas declaradas", tree.len());
        Ok(Self {
            navigator: Navigator::new(tree, history, surface),
            store: Store::new(),
        })
    }

    /// Primer render desde la URL de carga
    pub fn start(&self) -> Result<NavOutcome, AppError> {
        let outcome = self.navigator.start()?;
        log::info!("✅ [APP] Primer render: {:?}", outcome);
        Ok(outcome)
    }

    pub fn navigator(&self) -> &Navigator<H, S> {
        &self.navigator
    }

    /// Store global (reservado, el router no lo usa)
    pub fn store(&self) -> &Store {
        &self.store
    }
}

#[cfg(target_arch = "wasm32")]
impl App<BrowserHistory, DomSurface> {
    /// Montar en el elemento `config.mount_element_id` del documento
    pub fn mount(config: &AppConfig) -> Result<Self, AppError> {
        let surface = DomSurface::mount(&config.mount_element_id)?;
        let root = surface.root().clone();
        let app = Self::new(config, BrowserHistory::new()?, surface)?;
        install_listeners(app.navigator(), &root)?;
        Ok(app)
    }
}
