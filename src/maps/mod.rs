// Módulo de mapas: trait común + implementación MapLibre + sesión de rutas

pub mod traits;
pub mod web;
pub mod session;

#[cfg(test)]
pub mod memory;

pub use traits::{MapConfig, MapError, MapSurface, RouteLayerStyle};
pub use session::MapSession;
pub use web::MapLibreSurface;
