// ============================================================================
// MEMORY HOST - Historial y superficie en memoria (tests, entornos sin DOM)
// ============================================================================

use crate::dom::View;
use crate::error::HostError;
use crate::host::traits::{DisplaySurface, HistoryApi, HistoryState, PopState};

#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryState>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(initial_path: &str) -> Self {
        Self {
            entries: vec![HistoryState::new(initial_path, 0)],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryState] {
        &self.entries
    }

    /// Simula el botón "atrás"; `None` si ya está en la primera entrada
    pub fn back(&mut self) -> Option<PopState> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(PopState {
            state: self.current(),
        })
    }

    /// Simula el botón "adelante"
    pub fn forward(&mut self) -> Option<PopState> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(PopState {
            state: self.current(),
        })
    }
}

impl HistoryApi for MemoryHistory {
    fn current(&self) -> HistoryState {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, path: &str) -> Result<HistoryState, HostError> {
        let state = HistoryState::new(path, self.current().depth + 1);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state.clone());
        self.cursor += 1;
        Ok(state)
    }

    fn replace(&mut self, path: &str) -> Result<HistoryState, HostError> {
        let state = HistoryState::new(path, self.current().depth);
        self.entries[self.cursor] = state.clone();
        Ok(state)
    }
}

/// Superficie que guarda la última vista montada
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    view: Option<View>,
    commits: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub fn html(&self) -> String {
        self.view.as_ref().map(View::to_html).unwrap_or_default()
    }

    /// Cuántas veces se reemplazó el contenido
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl DisplaySurface for MemorySurface {
    fn replace(&mut self, view: &View) -> Result<(), HostError> {
        self.view = Some(view.clone());
        self.commits += 1;
        Ok(())
    }
}
