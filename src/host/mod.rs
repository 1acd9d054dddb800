// Módulo de hosts con implementaciones específicas por plataforma

pub mod memory;
pub mod traits;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::{MemoryHistory, MemorySurface};
pub use traits::{DisplaySurface, HistoryApi, HistoryState, PopState};
