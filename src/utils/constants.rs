// ============================================================================
// CONSTANTS - Valores de presentación de las rutas en el mapa
// ============================================================================
// Colores por ranking, anchos y opacidades: se mantienen exactos.
// ============================================================================

/// Colores por posición: 0 verde, 1 naranja, 2 azul, 3+ gris
pub const ROUTE_COLORS: [&str; 4] = ["#4caf50", "#ff9800", "#2196f3", "#9e9e9e"];

/// Ancho de la ruta visible (activa)
pub const ACTIVE_ROUTE_WIDTH: f64 = 6.0;

/// Ancho de las rutas ocultas (presentes pero invisibles)
pub const HIDDEN_ROUTE_WIDTH: f64 = 0.0;

pub const BEST_ROUTE_OPACITY: f64 = 1.0;
pub const ALTERNATIVE_ROUTE_OPACITY: f64 = 0.7;

/// Padding de fitBounds al encuadrar origen y destino
pub const FIT_BOUNDS_PADDING: f64 = 80.0;

pub const START_MARKER_COLOR: &str = "green";
pub const END_MARKER_COLOR: &str = "red";

/// Prefijo de los ids de capa/fuente: "route0", "route1", ...
pub const ROUTE_ID_PREFIX: &str = "route";

/// Color de una ruta según su posición en la respuesta
pub fn route_color(index: usize) -> &'static str {
    ROUTE_COLORS[index.min(ROUTE_COLORS.len() - 1)]
}

/// Id sintético de capa y fuente para la ruta `index`
pub fn route_layer_id(index: usize) -> String {
    format!("{}{}", ROUTE_ID_PREFIX, index)
}
