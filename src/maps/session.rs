// ============================================================================
// MAP SESSION - Estado del mapa para la búsqueda actual
// ============================================================================
// Dueño único de: superficie del mapa, marcadores, ids de capas/fuentes y
// ruta activa. Solo se muta con reset_routes / render_routes / select_route /
// place_markers. Invariante: como mucho una capa con ancho > 0.
// ============================================================================

use super::{MapError, MapSurface, RouteLayerStyle};
use crate::models::{Coordinate, Route};
use crate::utils::constants::*;

pub struct MapSession<S: MapSurface> {
    surface: S,
    route_layers: Vec<String>,
    route_sources: Vec<String>,
    active_route: Option<String>,
    start_marker: Option<S::Marker>,
    end_marker: Option<S::Marker>,
}

impl<S: MapSurface> MapSession<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            route_layers: Vec::new(),
            route_sources: Vec::new(),
            active_route: None,
            start_marker: None,
            end_marker: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn route_layer_ids(&self) -> &[String] {
        &self.route_layers
    }

    pub fn active_route(&self) -> Option<&str> {
        self.active_route.as_deref()
    }

    /// Quitar todas las capas y fuentes de rutas. Idempotente.
    pub fn reset_routes(&mut self) -> Result<(), MapError> {
        for id in &self.route_layers {
            if self.surface.has_layer(id) {
                self.surface.remove_layer(id)?;
            }
        }
        for id in &self.route_sources {
            if self.surface.has_source(id) {
                self.surface.remove_source(id)?;
            }
        }

        self.route_layers.clear();
        self.route_sources.clear();
        self.active_route = None;
        Ok(())
    }

    /// Crear fuente + capa por ruta; solo la ruta 0 queda visible
    pub fn render_routes(&mut self, routes: &[Route]) -> Result<(), MapError> {
        for (index, route) in routes.iter().enumerate() {
            let id = route_layer_id(index);

            self.surface.add_route_source(&id, &route.geometry)?;
            self.route_sources.push(id.clone());

            self.surface.add_route_layer(&layer_style(index))?;
            self.route_layers.push(id);
        }

        if !routes.is_empty() {
            self.active_route = Some(route_layer_id(0));
        }

        log::info!("🗺️ [MAP] {} rutas renderizadas", routes.len());
        Ok(())
    }

    /// Mostrar exclusivamente la ruta `id`.
    /// Devuelve false (sin tocar nada) si la capa no existe.
    /// Si el mapa falla a mitad, se restauran los anchos de la ruta activa anterior.
    pub fn select_route(&mut self, id: &str) -> Result<bool, MapError> {
        if !self.route_layers.iter().any(|l| l == id) || !self.surface.has_layer(id) {
            log::warn!("⚠️ [MAP] Ruta desconocida: {}", id);
            return Ok(false);
        }

        if let Err(err) = self.show_exclusively(id) {
            self.restore_active_widths();
            return Err(err);
        }
        self.active_route = Some(id.to_string());

        log::info!("🎯 [MAP] Ruta activa: {}", id);
        Ok(true)
    }

    fn show_exclusively(&mut self, id: &str) -> Result<(), MapError> {
        for layer in &self.route_layers {
            if self.surface.has_layer(layer) {
                self.surface.set_line_width(layer, HIDDEN_ROUTE_WIDTH)?;
            }
        }
        self.surface.set_line_width(id, ACTIVE_ROUTE_WIDTH)
    }

    fn restore_active_widths(&mut self) {
        for layer in &self.route_layers {
            if !self.surface.has_layer(layer) {
                continue;
            }
            let width = if self.active_route.as_deref() == Some(layer.as_str()) {
                ACTIVE_ROUTE_WIDTH
            } else {
                HIDDEN_ROUTE_WIDTH
            };
            if let Err(e) = self.surface.set_line_width(layer, width) {
                log::warn!("⚠️ [MAP] No se pudo restaurar {}: {}", layer, e);
            }
        }
    }

    /// Reemplazar marcadores de origen/destino y encuadrar ambos
    pub fn place_markers(&mut self, start: Coordinate, end: Coordinate) -> Result<(), MapError> {
        if let Some(marker) = self.start_marker.take() {
            self.surface.remove_marker(marker);
        }
        if let Some(marker) = self.end_marker.take() {
            self.surface.remove_marker(marker);
        }

        self.start_marker = Some(self.surface.add_marker(start, START_MARKER_COLOR)?);
        self.end_marker = Some(self.surface.add_marker(end, END_MARKER_COLOR)?);

        self.surface.fit_bounds(start, end, FIT_BOUNDS_PADDING)
    }
}

/// Estilo inicial de la capa según su posición
pub fn layer_style(index: usize) -> RouteLayerStyle {
    let is_best = index == 0;
    RouteLayerStyle {
        id: route_layer_id(index),
        color: route_color(index),
        width: if is_best { ACTIVE_ROUTE_WIDTH } else { HIDDEN_ROUTE_WIDTH },
        opacity: if is_best { BEST_ROUTE_OPACITY } else { ALTERNATIVE_ROUTE_OPACITY },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::memory::{sample_routes, MemoryMap};

    fn session_with_routes(n: usize) -> MapSession<MemoryMap> {
        let mut session = MapSession::new(MemoryMap::default());
        session.reset_routes().unwrap();
        session.render_routes(&sample_routes(n)).unwrap();
        session
    }

    #[test]
    fn render_shows_only_the_recommended_route() {
        let session = session_with_routes(4);
        let map = session.surface();

        assert_eq!(map.visible_layers(), vec!["route0".to_string()]);
        assert_eq!(session.active_route(), Some("route0"));
        assert_eq!(session.route_layer_ids(), ["route0", "route1", "route2", "route3"]);
        assert_eq!(map.source_ids(), vec!["route0", "route1", "route2", "route3"]);

        let best = map.layer("route0").unwrap();
        assert_eq!((best.color, best.width, best.opacity), ("#4caf50", 6.0, 1.0));
        let last = map.layer("route3").unwrap();
        assert_eq!((last.color, last.width, last.opacity), ("#9e9e9e", 0.0, 0.7));
    }

    #[test]
    fn select_makes_target_exclusively_visible() {
        let mut session = session_with_routes(3);

        assert!(session.select_route("route1").unwrap());
        assert_eq!(session.surface().visible_layers(), vec!["route1".to_string()]);
        assert_eq!(session.surface().width("route1"), Some(6.0));
        assert_eq!(session.surface().width("route0"), Some(0.0));
        assert_eq!(session.surface().width("route2"), Some(0.0));
        assert_eq!(session.active_route(), Some("route1"));
    }

    #[test]
    fn select_is_idempotent() {
        let mut session = session_with_routes(3);
        session.select_route("route2").unwrap();
        let before = session.surface().clone();

        session.select_route("route2").unwrap();
        assert_eq!(session.surface(), &before);
        assert_eq!(session.active_route(), Some("route2"));
    }

    #[test]
    fn select_unknown_route_changes_nothing() {
        let mut session = session_with_routes(2);
        let before = session.surface().clone();

        assert!(!session.select_route("route9").unwrap());
        assert_eq!(session.surface(), &before);
        assert_eq!(session.active_route(), Some("route0"));
    }

    #[test]
    fn failed_select_keeps_previous_route_visible() {
        let mut session = session_with_routes(3);
        session.surface.fail_on_width = Some("route1".to_string());

        assert!(session.select_route("route1").is_err());
        assert_eq!(session.surface().visible_layers(), vec!["route0".to_string()]);
        assert_eq!(session.surface().width("route0"), Some(6.0));
        assert_eq!(session.active_route(), Some("route0"));
    }

    #[test]
    fn reset_then_render_empty_clears_everything() {
        let mut session = session_with_routes(3);
        session.select_route("route1").unwrap();

        session.reset_routes().unwrap();
        session.render_routes(&[]).unwrap();

        assert!(session.surface().layer_ids().is_empty());
        assert!(session.surface().source_ids().is_empty());
        assert!(session.route_layer_ids().is_empty());
        assert!(session.route_sources.is_empty());
        assert_eq!(session.active_route(), None);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut session = MapSession::new(MemoryMap::default());
        session.reset_routes().unwrap();
        session.reset_routes().unwrap();
        assert!(session.surface().layer_ids().is_empty());
    }

    #[test]
    fn new_search_rebuilds_layers() {
        let mut session = session_with_routes(4);
        session.reset_routes().unwrap();
        session.render_routes(&sample_routes(2)).unwrap();

        assert_eq!(session.surface().layer_ids(), vec!["route0", "route1"]);
        assert_eq!(session.surface().visible_layers(), vec!["route0".to_string()]);
    }

    #[test]
    fn failed_layer_keeps_source_tracked_for_cleanup() {
        let mut map = MemoryMap::default();
        map.fail_on_layer = Some("route1".to_string());
        let mut session = MapSession::new(map);

        assert!(session.render_routes(&sample_routes(3)).is_err());
        assert_eq!(session.route_sources, ["route0", "route1"]);

        session.surface.fail_on_layer = None;
        session.reset_routes().unwrap();
        assert!(session.surface().source_ids().is_empty());
        assert!(session.surface().layer_ids().is_empty());
    }

    #[test]
    fn markers_are_replaced_not_accumulated() {
        let mut session = MapSession::new(MemoryMap::default());
        let a = Coordinate::new(88.36, 22.57);
        let b = Coordinate::new(88.42, 22.58);
        let c = Coordinate::new(88.30, 22.50);

        session.place_markers(a, b).unwrap();
        session.place_markers(b, c).unwrap();

        let markers = session.surface().markers();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0], (b, "green".to_string()));
        assert_eq!(markers[1], (c, "red".to_string()));

        let (bounds, padding) = session.surface().viewport().unwrap();
        assert_eq!(bounds, Coordinate::bounds(b, c));
        assert_eq!(padding, 80.0);
    }
}
