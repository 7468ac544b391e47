// ============================================================================
// ROUTE MODELS - Estructuras compartidas con el backend (/geocode, /route)
// ============================================================================

use geojson::Geometry;
use serde::{Deserialize, Serialize};

use super::{Coordinate, TrafficLevel};

/// Ruta candidata tal como la devuelve el backend.
/// El orden en la respuesta es el ranking: índice 0 = recomendada.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Route {
    pub geometry: Geometry,
    pub duration_min: f64,
    pub distance_km: f64,
    pub avg_speed: f64,

    // Campos de ranking opcionales (informativos, nunca se re-ordena)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
}

impl Route {
    pub fn traffic_level(&self) -> TrafficLevel {
        TrafficLevel::estimate(self.duration_min, self.distance_km)
    }
}

/// Recomendación que acompaña la lista de rutas
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Recommendation {
    #[serde(default)]
    pub best_route_index: usize,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub time_saved: f64,
}

/// Respuesta de GET /route
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RoutesResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_routes: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}

/// Respuesta de GET /geocode: coordenadas o `{ error }`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GeocodeResponse {
    /// Solo hay coordenada si no hay error y vienen ambos campos
    pub fn coordinate(&self) -> Option<Coordinate> {
        if self.error.is_some() {
            return None;
        }
        match (self.longitude, self.latitude) {
            (Some(longitude), Some(latitude)) => Some(Coordinate::new(longitude, latitude)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_route_with_ranking_fields() {
        let json = r#"{
            "rank": 1,
            "distance_km": 12.4,
            "duration_min": 18.5,
            "avg_speed": 40.2,
            "traffic_score": 2,
            "overall_score": 63.2,
            "geometry": { "type": "LineString", "coordinates": [[88.36, 22.57], [88.40, 22.60]] }
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.rank, Some(1));
        assert_eq!(route.traffic_score, Some(2));
        assert_eq!(route.duration_min, 18.5);
        assert!(matches!(route.geometry.value, geojson::Value::LineString(ref pts) if pts.len() == 2));
    }

    #[test]
    fn ranking_fields_are_optional() {
        let json = r#"{
            "distance_km": 3,
            "duration_min": 9,
            "avg_speed": 20,
            "geometry": { "type": "LineString", "coordinates": [[0, 0], [1, 1]] }
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.rank, None);
        assert_eq!(route.overall_score, None);
        assert_eq!(route.traffic_level(), TrafficLevel::Heavy);
    }

    #[test]
    fn error_response_has_no_routes() {
        let resp: RoutesResponse = serde_json::from_str(r#"{ "error": "no path" }"#).unwrap();
        assert!(resp.routes.is_empty());
        assert_eq!(resp.error.as_deref(), Some("no path"));
    }

    #[test]
    fn geocode_coordinate_requires_both_fields() {
        let ok: GeocodeResponse =
            serde_json::from_str(r#"{ "place": "Kolkata", "latitude": 22.57, "longitude": 88.36 }"#).unwrap();
        assert_eq!(ok.coordinate(), Some(Coordinate::new(88.36, 22.57)));

        let partial: GeocodeResponse = serde_json::from_str(r#"{ "latitude": 22.57 }"#).unwrap();
        assert_eq!(partial.coordinate(), None);

        let failed: GeocodeResponse =
            serde_json::from_str(r#"{ "error": "Location not found" }"#).unwrap();
        assert_eq!(failed.coordinate(), None);
    }
}
