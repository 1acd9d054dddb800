// ============================================================================
// STATE MODULE - Contenedor de estado global
// ============================================================================

pub mod store;

pub use store::*;
