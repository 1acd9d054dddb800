// ============================================================================
// ERRORS - Taxonomía de errores del shell
// ============================================================================

use thiserror::Error;

/// Declaración de rutas inválida. Fatal en el arranque.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteSpecError {
    #[error("root route must use path \"/\", found {0:?}")]
    InvalidRoot(String),
    #[error("route {parent:?} declares more than one index child")]
    DuplicateIndex { parent: String },
    #[error("route {0:?} has neither content nor children")]
    EmptyRoute(String),
    #[error("index route under {parent:?} cannot declare children")]
    IndexWithChildren { parent: String },
    #[error("invalid path segment {segment:?} under {parent:?}")]
    InvalidSegment { parent: String, segment: String },
    #[error("route {parent:?} declares segment {segment:?} twice")]
    DuplicateSegment { parent: String, segment: String },
    #[error("route {parent:?} declares more than one parameter child ({first:?}, {second:?})")]
    AmbiguousParameter {
        parent: String,
        first: String,
        second: String,
    },
    #[error("route {route:?} captures parameter {name:?} twice")]
    DuplicateParamName { route: String, name: String },
    #[error("catch-all route must be a leaf directly under \"/\", found under {parent:?}")]
    MisplacedCatchAll { parent: String },
}

/// Ninguna ruta coincide con el path pedido. Se recupera localmente.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches {path:?}")]
pub struct NoMatch {
    pub path: String,
}

/// Fallos del host (DOM, History API)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("mount element #{0} not found")]
    MountNotFound(String),
    #[error("no window/document available")]
    NoDocument,
    #[error("history error: {0}")]
    History(String),
    #[error("dom error: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl HostError {
    /// Convierte un `JsValue` de web_sys en mensaje legible
    pub fn dom(context: &str, value: wasm_bindgen::JsValue) -> Self {
        HostError::Dom(format!("{}: {:?}", context, value))
    }

    pub fn history(context: &str, value: wasm_bindgen::JsValue) -> Self {
        HostError::History(format!("{}: {:?}", context, value))
    }
}

/// Errores de arranque de la aplicación
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("invalid route declaration: {0}")]
    InvalidRouteSpec(#[from] RouteSpecError),
    #[error(transparent)]
    Host(#[from] HostError),
}
