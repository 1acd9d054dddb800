// ============================================================================
// NAVIGATION CONTROLLER - Dueño único del path actual y del árbol de rutas
// ============================================================================
// Estados: Idle (esperando) y Rendering (match + render en curso).
// Una petición que llega durante Rendering se guarda en un único slot
// pendiente (la última sobrescribe a las anteriores) y se aplica al terminar
// la pasada actual.
// ============================================================================

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::error::HostError;
use crate::host::{DisplaySurface, HistoryApi, HistoryState, PopState};
use crate::router::link::resolve;
use crate::router::matcher::{match_path, MatchResult};
use crate::router::render::render;
use crate::router::route::{RouteTree, ROOT_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Idle,
    Rendering,
}

/// Resultado de una petición de navegación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Se montó una salida nueva
    Rendered,
    /// Sin match: se conserva la salida anterior
    Retained,
    /// Llegó durante un render; se aplicará al terminar
    Queued,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NavRequest {
    Start,
    Push(String),
    Pop(HistoryState),
}

enum HistoryWrite {
    Push,
    Replace,
    Keep,
}

struct Core<H, S> {
    tree: RouteTree,
    history: H,
    surface: S,
}

struct Inner<H, S> {
    core: RefCell<Core<H, S>>,
    state: Cell<NavState>,
    pending: RefCell<Option<NavRequest>>,
    location: RefCell<String>,
    current: RefCell<Option<MatchResult>>,
}

/// Handle del controlador de navegación. Los clones comparten el mismo estado.
pub struct Navigator<H, S> {
    inner: Rc<Inner<H, S>>,
}

impl<H, S> Clone for Navigator<H, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H: HistoryApi, S: DisplaySurface> Navigator<H, S> {
    pub fn new(tree: RouteTree, history: H, surface: S) -> Self {
        let location = resolve(ROOT_PATH, &history.current().path);
        Self {
            inner: Rc::new(Inner {
                core: RefCell::new(Core { tree, history, surface }),
                state: Cell::new(NavState::Idle),
                pending: RefCell::new(None),
                location: RefCell::new(location),
                current: RefCell::new(None),
            }),
        }
    }

    /// Primer render a partir de la URL de carga (sin nueva entrada)
    pub fn start(&self) -> Result<NavOutcome, HostError> {
        self.request(NavRequest::Start)
    }

    /// Navegar a `path` (absoluto o relativo al path actual)
    pub fn navigate(&self, path: &str) -> Result<NavOutcome, HostError> {
        self.request(NavRequest::Push(path.to_string()))
    }

    /// Back/forward del navegador: re-render sin nueva entrada
    pub fn on_pop_state(&self, event: PopState) -> Result<NavOutcome, HostError> {
        self.request(NavRequest::Pop(event.state))
    }

    pub fn state(&self) -> NavState {
        self.inner.state.get()
    }

    pub fn current_path(&self) -> String {
        self.inner.location.borrow().clone()
    }

    /// Último match renderizado con éxito
    pub fn current_match(&self) -> Option<MatchResult> {
        self.inner.current.borrow().clone()
    }

    pub fn history(&self) -> Ref<'_, H> {
        Ref::map(self.inner.core.borrow(), |core| &core.history)
    }

    pub fn history_mut(&self) -> RefMut<'_, H> {
        RefMut::map(self.inner.core.borrow_mut(), |core| &mut core.history)
    }

    pub fn surface(&self) -> Ref<'_, S> {
        Ref::map(self.inner.core.borrow(), |core| &core.surface)
    }

    pub fn tree(&self) -> Ref<'_, RouteTree> {
        Ref::map(self.inner.core.borrow(), |core| &core.tree)
    }

    fn request(&self, request: NavRequest) -> Result<NavOutcome, HostError> {
        let superseded = self.inner.pending.borrow_mut().replace(request);
        if let Some(old) = superseded {
            log::debug!("⏭️ [ROUTER] Petición descartada (superada): {:?}", old);
        }
        if self.state() == NavState::Rendering {
            log::debug!("⏳ [ROUTER] Render en curso, petición en cola");
            return Ok(NavOutcome::Queued);
        }
        self.drain()
    }

    fn drain(&self) -> Result<NavOutcome, HostError> {
        self.inner.state.set(NavState::Rendering);
        let mut outcome = Ok(NavOutcome::Retained);
        loop {
            let Some(request) = self.inner.pending.borrow_mut().take() else {
                break;
            };
            outcome = self.apply(request);
            if let Err(e) = &outcome {
                log::error!("❌ [ROUTER] Error aplicando navegación: {}", e);
                self.inner.pending.borrow_mut().take();
                break;
            }
        }
        self.inner.state.set(NavState::Idle);
        outcome
    }

    /// El path y el match se confirman solo si el host aceptó la salida y la entrada de historial
    fn apply(&self, request: NavRequest) -> Result<NavOutcome, HostError> {
        let mut core = self.inner.core.borrow_mut();
        let previous = self.current_path();

        let (target, entry) = match request {
            NavRequest::Start => {
                let target = resolve(ROOT_PATH, &core.history.current().path);
                log::info!("🧭 [ROUTER] Arranque en {}", target);
                (target, HistoryWrite::Keep)
            }
            NavRequest::Push(path) => {
                let target = resolve(&previous, &path);
                log::info!("🧭 [ROUTER] {} -> {}", previous, target);
                // mismo path: se reemplaza la entrada
                let entry = if target == previous {
                    HistoryWrite::Replace
                } else {
                    HistoryWrite::Push
                };
                (target, entry)
            }
            NavRequest::Pop(state) => {
                let target = resolve(ROOT_PATH, &state.path);
                log::info!("↩️ [ROUTER] popstate {} -> {} (depth {})", previous, target, state.depth);
                (target, HistoryWrite::Keep)
            }
        };

        let matched = match match_path(&core.tree, &target) {
            Ok(matched) => {
                let view = render(&core.tree, &matched, &target);
                core.surface.replace(&view)?;
                Some(matched)
            }
            Err(no_match) => {
                log::warn!("⚠️ [ROUTER] {}, se conserva la vista anterior", no_match);
                None
            }
        };

        match entry {
            HistoryWrite::Push => {
                core.history.push(&target)?;
            }
            HistoryWrite::Replace => {
                core.history.replace(&target)?;
            }
            HistoryWrite::Keep => {}
        }

        *self.inner.location.borrow_mut() = target;
        match matched {
            Some(matched) => {
                *self.inner.current.borrow_mut() = Some(matched);
                Ok(NavOutcome::Rendered)
            }
            None => Ok(NavOutcome::Retained),
        }
    }
}
