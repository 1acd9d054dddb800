// Traits comunes para los hosts del router (navegador real o memoria)

use serde::{Deserialize, Serialize};

use crate::dom::View;
use crate::error::HostError;

/// Estado guardado en cada entrada del historial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub path: String,
    /// Número de pushes desde el inicio de la sesión
    pub depth: u32,
}

impl HistoryState {
    pub fn new(path: impl Into<String>, depth: u32) -> Self {
        Self {
            path: path.into(),
            depth,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}

/// Evento de back/forward del navegador
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopState {
    pub state: HistoryState,
}

/// Superficie append-only de entradas visitadas con cursor
pub trait HistoryApi {
    /// Entrada bajo el cursor
    fn current(&self) -> HistoryState;

    /// Agregar entrada nueva (descarta las entradas "forward")
    fn push(&mut self, path: &str) -> Result<HistoryState, HostError>;

    /// Reemplazar la entrada actual
    fn replace(&mut self, path: &str) -> Result<HistoryState, HostError>;
}

/// Punto de montaje donde se coloca la salida renderizada
pub trait DisplaySurface {
    /// Reemplazar de una vez todo el contenido visible
    fn replace(&mut self, view: &View) -> Result<(), HostError>;
}
