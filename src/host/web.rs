// ============================================================================
// WEB HOST - History API y punto de montaje reales (solo wasm32)
// ============================================================================
// Los listeners globales (popstate en window, click delegado en el mount)
// se registran UNA SOLA VEZ por sesión; un segundo intento se ignora.
// ============================================================================

use std::cell::Cell;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, History, Location, MouseEvent, PopStateEvent};

use crate::dom::events::{on_element_event, on_window_event};
use crate::dom::mount::replace_children;
use crate::dom::{get_element_by_id, window, View};
use crate::error::HostError;
use crate::host::traits::{DisplaySurface, HistoryApi, HistoryState, PopState};
use crate::router::link::LINK_ATTR;
use crate::router::Navigator;

thread_local! {
    static LISTENERS_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

pub type BrowserNavigator = Navigator<BrowserHistory, DomSurface>;

/// `window.history` + `window.location`
pub struct BrowserHistory {
    history: History,
    location: Location,
}

impl BrowserHistory {
    pub fn new() -> Result<Self, HostError> {
        let window = window().ok_or(HostError::NoDocument)?;
        let history = window
            .history()
            .map_err(|e| HostError::history("window.history", e))?;
        Ok(Self {
            history,
            location: window.location(),
        })
    }

    fn location_path(&self) -> String {
        let pathname = self.location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = self.location.search().unwrap_or_default();
        let hash = self.location.hash().unwrap_or_default();
        format!("{}{}{}", pathname, search, hash)
    }

    fn stored_state(&self) -> Option<HistoryState> {
        let raw = self.history.state().ok()?.as_string()?;
        HistoryState::from_json(&raw)
    }
}

impl HistoryApi for BrowserHistory {
    fn current(&self) -> HistoryState {
        // La URL manda; el estado guardado solo aporta la profundidad
        let path = self.location_path();
        let depth = self.stored_state().map(|s| s.depth).unwrap_or(0);
        HistoryState::new(path, depth)
    }

    fn push(&mut self, path: &str) -> Result<HistoryState, HostError> {
        let state = HistoryState::new(path, self.current().depth + 1);
        self.history
            .push_state_with_url(&JsValue::from_str(&state.to_json()), "", Some(path))
            .map_err(|e| HostError::history("pushState", e))?;
        Ok(state)
    }

    fn replace(&mut self, path: &str) -> Result<HistoryState, HostError> {
        let state = HistoryState::new(path, self.current().depth);
        self.history
            .replace_state_with_url(&JsValue::from_str(&state.to_json()), "", Some(path))
            .map_err(|e| HostError::history("replaceState", e))?;
        Ok(state)
    }
}

/// Elemento de montaje (`#root` por defecto)
pub struct DomSurface {
    root: Element,
}

impl DomSurface {
    pub fn mount(element_id: &str) -> Result<Self, HostError> {
        let root = get_element_by_id(element_id)
            .ok_or_else(|| HostError::MountNotFound(element_id.to_string()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}

impl DisplaySurface for DomSurface {
    fn replace(&mut self, view: &View) -> Result<(), HostError> {
        replace_children(&self.root, view)
    }
}

/// Registrar popstate + interceptación de links internos
pub fn install_listeners(navigator: &BrowserNavigator, root: &Element) -> Result<(), HostError> {
    if LISTENERS_INSTALLED.with(|installed| installed.replace(true)) {
        log::warn!("⚠️ [ROUTER] install_listeners ya fue llamado, ignorando llamada duplicada");
        return Ok(());
    }

    let nav = navigator.clone();
    on_window_event("popstate", move |event| {
        let state = event
            .dyn_ref::<PopStateEvent>()
            .and_then(|e| e.state().as_string())
            .and_then(|raw| HistoryState::from_json(&raw))
            .unwrap_or_else(|| nav.history().current());
        if let Err(e) = nav.on_pop_state(PopState { state }) {
            log::error!("❌ [ROUTER] Error en popstate: {}", e);
        }
    })?;

    let nav = navigator.clone();
    let selector = format!("a[{}]", LINK_ATTR);
    on_element_event(root, "click", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        // Dejar al navegador: botón secundario, modificadores (nueva pestaña) o ya manejado
        if mouse.button() != 0
            || mouse.meta_key()
            || mouse.ctrl_key()
            || mouse.shift_key()
            || mouse.alt_key()
            || event.default_prevented()
        {
            return;
        }
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(anchor)) = target.closest(&selector) else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        event.prevent_default();
        if let Err(e) = nav.navigate(&href) {
            log::error!("❌ [ROUTER] Error navegando a {}: {}", href, e);
        }
    })?;

    log::info!("👂 [ROUTER] Listeners de navegación registrados");
    Ok(())
}
