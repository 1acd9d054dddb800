// ============================================================================
// STORE - Contenedor de estado global (sin reducers por ahora)
// ============================================================================
// Punto de integración reservado: los slices futuros (p.ej. auth) agregan su
// campo a `RootState` y sus variantes a `Action`. El router no lo lee.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Estado raíz (vacío)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootState {}

/// Acciones despachables. Sin variantes: no hay reducers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {}

/// Store compartido (los clones apuntan al mismo estado)
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Rc<RefCell<RootState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_state(&self) -> RootState {
        self.state.borrow().clone()
    }

    pub fn dispatch(&self, action: Action) {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_starts_empty_and_clones_share_state() {
        let store = Store::new();
        let other = store.clone();
        assert!(Rc::ptr_eq(&store.state, &other.state));
        assert_eq!(store.get_state(), RootState::default());
        assert_eq!(serde_json::to_string(&store.get_state()).unwrap(), "{}");
    }
}
