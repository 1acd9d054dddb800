// ============================================================================
// ROUTER MODULE - Rutas anidadas, matcher, layouts y navegación
// ============================================================================

pub mod link;
pub mod matcher;
pub mod navigation;
pub mod render;
pub mod route;

pub use link::{is_active, link, nav_link, resolve};
pub use matcher::{match_path, MatchResult, Params, RouteMatch};
pub use navigation::{NavOutcome, NavState, Navigator};
pub use render::{render, RenderContext};
pub use route::{declare_routes, NodeId, RouteNode, RouteSpec, RouteTree, Segment};
