// Mapa en memoria para tests: registra capas, fuentes, marcadores y vista

use std::collections::BTreeMap;

use geojson::{Geometry, Value};

use super::{MapError, MapSurface, RouteLayerStyle};
use crate::models::{Coordinate, Route};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryMap {
    layers: BTreeMap<String, RouteLayerStyle>,
    sources: BTreeMap<String, Geometry>,
    markers: BTreeMap<u32, (Coordinate, String)>,
    next_marker: u32,
    viewport: Option<([[f64; 2]; 2], f64)>,
    /// Simula que MapLibre rechaza esta capa
    pub fail_on_layer: Option<String>,
    /// Simula que MapLibre rechaza ensanchar esta capa
    pub fail_on_width: Option<String>,
}

impl MemoryMap {
    pub fn layer(&self, id: &str) -> Option<&RouteLayerStyle> {
        self.layers.get(id)
    }

    pub fn width(&self, id: &str) -> Option<f64> {
        self.layers.get(id).map(|l| l.width)
    }

    pub fn layer_ids(&self) -> Vec<String> {
        sorted_ids(self.layers.keys())
    }

    pub fn source_ids(&self) -> Vec<String> {
        sorted_ids(self.sources.keys())
    }

    pub fn visible_layers(&self) -> Vec<String> {
        sorted_ids(
            self.layers
                .iter()
                .filter(|(_, style)| style.width > 0.0)
                .map(|(id, _)| id),
        )
    }

    pub fn markers(&self) -> Vec<(Coordinate, String)> {
        self.markers.values().cloned().collect()
    }

    pub fn viewport(&self) -> Option<([[f64; 2]; 2], f64)> {
        self.viewport
    }
}

// "route10" después de "route9"
fn sorted_ids<'a>(ids: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut ids: Vec<String> = ids.cloned().collect();
    ids.sort_by_key(|id| (id.len(), id.clone()));
    ids
}

impl MapSurface for MemoryMap {
    type Marker = u32;

    fn add_route_source(&mut self, id: &str, geometry: &Geometry) -> Result<(), MapError> {
        if self.sources.contains_key(id) {
            return Err(MapError::Js(format!("There is already a source with ID \"{}\".", id)));
        }
        self.sources.insert(id.to_string(), geometry.clone());
        Ok(())
    }

    fn add_route_layer(&mut self, style: &RouteLayerStyle) -> Result<(), MapError> {
        if self.fail_on_layer.as_deref() == Some(style.id.as_str()) {
            return Err(MapError::Js(format!("Layer \"{}\" rejected", style.id)));
        }
        if !self.sources.contains_key(&style.id) {
            return Err(MapError::Js(format!("Source \"{}\" not found", style.id)));
        }
        if self.layers.contains_key(&style.id) {
            return Err(MapError::Js(format!("Layer with id \"{}\" already exists", style.id)));
        }
        self.layers.insert(style.id.clone(), style.clone());
        Ok(())
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layers.contains_key(id)
    }

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), MapError> {
        self.layers
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| MapError::Js(format!("Layer \"{}\" does not exist", id)))
    }

    fn remove_source(&mut self, id: &str) -> Result<(), MapError> {
        if self.layers.contains_key(id) {
            return Err(MapError::Js(format!("Source \"{}\" is in use", id)));
        }
        self.sources
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| MapError::Js(format!("Source \"{}\" does not exist", id)))
    }

    fn set_line_width(&mut self, id: &str, width: f64) -> Result<(), MapError> {
        if width > 0.0 && self.fail_on_width.as_deref() == Some(id) {
            return Err(MapError::Js(format!("setPaintProperty failed for \"{}\"", id)));
        }
        let layer = self
            .layers
            .get_mut(id)
            .ok_or_else(|| MapError::Js(format!("Layer \"{}\" does not exist", id)))?;
        layer.width = width;
        Ok(())
    }

    fn add_marker(&mut self, at: Coordinate, color: &str) -> Result<u32, MapError> {
        self.next_marker += 1;
        self.markers.insert(self.next_marker, (at, color.to_string()));
        Ok(self.next_marker)
    }

    fn remove_marker(&mut self, marker: u32) {
        self.markers.remove(&marker);
    }

    fn fit_bounds(&mut self, a: Coordinate, b: Coordinate, padding: f64) -> Result<(), MapError> {
        self.viewport = Some((Coordinate::bounds(a, b), padding));
        Ok(())
    }
}

/// Rutas de ejemplo: la i-ésima tarda 15 + 5i minutos sobre 12 km
pub fn sample_routes(n: usize) -> Vec<Route> {
    (0..n)
        .map(|i| {
            let offset = i as f64 * 0.01;
            Route {
                geometry: Geometry::new(Value::LineString(vec![
                    vec![88.36, 22.57],
                    vec![88.39 + offset, 22.60 - offset],
                    vec![88.42, 22.58],
                ])),
                duration_min: 15.0 + 5.0 * i as f64,
                distance_km: 12.0,
                avg_speed: 12.0 / ((15.0 + 5.0 * i as f64) / 60.0),
                rank: Some(i as u32 + 1),
                traffic_score: None,
                overall_score: None,
            }
        })
        .collect()
}
