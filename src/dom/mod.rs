// ============================================================================
// DOM MODULE - Vistas y helpers para manipulación DOM
// ============================================================================

pub mod builder;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod element;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod mount;

pub use builder::*;
pub use view::*;

#[cfg(target_arch = "wasm32")]
pub use element::*;
