use geojson::Geometry;
use serde_json::json;
use wasm_bindgen::JsValue;

use super::{MapConfig, MapError, MapSurface, RouteLayerStyle};
use crate::models::Coordinate;
use crate::utils::maplibre_ffi::{self, to_js, NavigationControl};

/// Renderizador de mapas para web usando MapLibre GL JS
pub struct MapLibreSurface {
    map: maplibre_ffi::Map,
}

impl MapLibreSurface {
    /// Crear el mapa en el contenedor configurado y agregar controles de navegación
    pub fn new(config: &MapConfig) -> Result<Self, MapError> {
        log::info!(
            "🗺️ [MAP] Inicializando MapLibre en #{} (centro {:?}, zoom {})",
            config.container,
            config.center.lng_lat(),
            config.zoom
        );

        let options = to_js(&json!({
            "container": config.container,
            "style": config.style_url,
            "center": config.center.lng_lat(),
            "zoom": config.zoom,
        }))
        .map_err(js_error)?;

        let map = maplibre_ffi::Map::new(&options).map_err(js_error)?;
        map.add_control(&NavigationControl::new());

        log::info!("✅ [MAP] Mapa inicializado");
        Ok(Self { map })
    }
}

fn js_error(err: JsValue) -> MapError {
    MapError::Js(
        err.as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

impl MapSurface for MapLibreSurface {
    type Marker = maplibre_ffi::Marker;

    fn add_route_source(&mut self, id: &str, geometry: &Geometry) -> Result<(), MapError> {
        let geometry = serde_json::to_value(geometry)
            .map_err(|e| MapError::InvalidGeometry(e.to_string()))?;
        let source = to_js(&json!({
            "type": "geojson",
            "data": {
                "type": "Feature",
                "geometry": geometry,
            },
        }))
        .map_err(js_error)?;
        self.map.add_source(id, &source).map_err(js_error)
    }

    fn add_route_layer(&mut self, style: &RouteLayerStyle) -> Result<(), MapError> {
        let layer = to_js(&json!({
            "id": style.id,
            "type": "line",
            "source": style.id,
            "layout": {
                "line-join": "round",
                "line-cap": "round",
            },
            "paint": {
                "line-color": style.color,
                "line-width": style.width,
                "line-opacity": style.opacity,
            },
        }))
        .map_err(js_error)?;
        self.map.add_layer(&layer).map_err(js_error)
    }

    fn has_layer(&self, id: &str) -> bool {
        !self.map.get_layer(id).is_undefined()
    }

    fn has_source(&self, id: &str) -> bool {
        !self.map.get_source(id).is_undefined()
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), MapError> {
        self.map.remove_layer(id).map_err(js_error)
    }

    fn remove_source(&mut self, id: &str) -> Result<(), MapError> {
        self.map.remove_source(id).map_err(js_error)
    }

    fn set_line_width(&mut self, id: &str, width: f64) -> Result<(), MapError> {
        self.map
            .set_paint_property(id, "line-width", &JsValue::from_f64(width))
            .map_err(js_error)
    }

    fn add_marker(&mut self, at: Coordinate, color: &str) -> Result<Self::Marker, MapError> {
        let options = to_js(&json!({ "color": color })).map_err(js_error)?;
        let lng_lat = to_js(&json!(at.lng_lat())).map_err(js_error)?;
        let marker = maplibre_ffi::Marker::new(&options);
        marker.set_lng_lat(&lng_lat);
        marker.add_to(&self.map);
        Ok(marker)
    }

    fn remove_marker(&mut self, marker: Self::Marker) {
        marker.remove();
    }

    fn fit_bounds(&mut self, a: Coordinate, b: Coordinate, padding: f64) -> Result<(), MapError> {
        // MapLibre acepta [sw, ne]; se normaliza para que el orden no importe
        let bounds = to_js(&json!(Coordinate::bounds(a, b))).map_err(js_error)?;
        let options = to_js(&json!({ "padding": padding })).map_err(js_error)?;
        self.map.fit_bounds(&bounds, &options).map_err(js_error)
    }
}
