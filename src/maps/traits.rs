use geojson::Geometry;

use crate::config::CONFIG;
use crate::models::Coordinate;

/// Operaciones mínimas que necesita una sesión de rutas sobre el motor de mapas.
/// `MapLibreSurface` las implementa en el navegador; los tests usan un mapa en memoria.
pub trait MapSurface {
    /// Handle de un marcador vivo en el mapa
    type Marker;

    /// Agregar una fuente GeoJSON con la geometría de una ruta
    fn add_route_source(&mut self, id: &str, geometry: &Geometry) -> Result<(), MapError>;

    /// Agregar una capa de línea sobre la fuente del mismo id
    fn add_route_layer(&mut self, style: &RouteLayerStyle) -> Result<(), MapError>;

    fn has_layer(&self, id: &str) -> bool;

    fn has_source(&self, id: &str) -> bool;

    fn remove_layer(&mut self, id: &str) -> Result<(), MapError>;

    fn remove_source(&mut self, id: &str) -> Result<(), MapError>;

    /// Cambiar `line-width` de una capa existente
    fn set_line_width(&mut self, id: &str, width: f64) -> Result<(), MapError>;

    /// Colocar un marcador de color en una coordenada
    fn add_marker(&mut self, at: Coordinate, color: &str) -> Result<Self::Marker, MapError>;

    fn remove_marker(&mut self, marker: Self::Marker);

    /// Ajustar la vista para encuadrar ambos puntos
    fn fit_bounds(&mut self, a: Coordinate, b: Coordinate, padding: f64) -> Result<(), MapError>;
}

/// Estado de pintura de una capa de ruta
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLayerStyle {
    pub id: String,
    pub color: &'static str,
    pub width: f64,
    pub opacity: f64,
}

/// Configuración inicial del mapa
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub container: String,
    pub style_url: String,
    pub center: Coordinate,
    pub zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container: "map".to_string(),
            style_url: CONFIG.map_style_url(),
            center: Coordinate::new(CONFIG.map_config.default_center_lng, CONFIG.map_config.default_center_lat),
            zoom: CONFIG.map_config.default_zoom,
        }
    }
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    InvalidGeometry(String),
    Js(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::InvalidGeometry(msg) => write!(f, "Invalid geometry: {}", msg),
            MapError::Js(msg) => write!(f, "Map library error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
