// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de UI, solo construye URLs, hace requests y parsea JSON
// ============================================================================

use gloo_net::http::Request;
use url::Url;

use crate::config::CONFIG;
use crate::models::{Coordinate, GeocodeResponse, RoutesResponse};
use crate::services::errors::SearchError;

/// Cliente API del backend de rutas
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Geocodificar un lugar.
    /// Transporte, `{ error }` y JSON inválido colapsan en `LocationNotFound`.
    pub async fn geocode(&self, place: &str) -> Result<Coordinate, SearchError> {
        let url = geocode_url(&self.base_url, place).map_err(|e| {
            log::error!("❌ [API] URL de geocoding inválida: {}", e);
            SearchError::LocationNotFound
        })?;

        log::info!("📍 [API] Geocodificando '{}'", place);

        let body = match get_text(url.as_str()).await {
            Ok(body) => body,
            Err(e) => {
                log::error!("❌ [API] Geocoding fetch error: {}", e);
                return Err(SearchError::LocationNotFound);
            }
        };

        parse_geocode_body(&body)
    }

    /// Pedir rutas candidatas entre dos puntos (orden del backend preservado)
    pub async fn fetch_routes(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<RoutesResponse, SearchError> {
        let url = route_url(&self.base_url, start, end)
            .map_err(|e| SearchError::RouteFetchFailed(format!("Invalid URL: {}", e)))?;

        log::info!("🛣️ [API] Pidiendo rutas: {}", url);

        let body = get_text(url.as_str())
            .await
            .map_err(SearchError::RouteFetchFailed)?;

        parse_routes_body(&body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// GET y cuerpo como texto. El status HTTP no se mira: el backend
/// responde 400/404/500 con un JSON `{ error }`.
async fn get_text(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .text()
        .await
        .map_err(|e| format!("Read error: {}", e))
}

/// `{base}/geocode?place=<texto codificado>`
pub fn geocode_url(base_url: &str, place: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(&format!("{}/geocode", base_url), &[("place", place)])
}

/// `{base}/route?start_lat=..&start_lng=..&end_lat=..&end_lng=..`
pub fn route_url(base_url: &str, start: Coordinate, end: Coordinate) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        &format!("{}/route", base_url),
        &[
            ("start_lat", start.latitude.to_string()),
            ("start_lng", start.longitude.to_string()),
            ("end_lat", end.latitude.to_string()),
            ("end_lng", end.longitude.to_string()),
        ],
    )
}

pub fn parse_geocode_body(body: &str) -> Result<Coordinate, SearchError> {
    let response: GeocodeResponse = serde_json::from_str(body).map_err(|e| {
        log::error!("❌ [API] Geocoding parse error: {}", e);
        SearchError::LocationNotFound
    })?;

    if let Some(error) = &response.error {
        log::error!("❌ [API] Geocoding error: {}", error);
        return Err(SearchError::LocationNotFound);
    }

    match response.coordinate() {
        Some(coordinate) => {
            log::info!(
                "✅ [API] '{}' → ({}, {})",
                response.place.as_deref().unwrap_or("?"),
                coordinate.longitude,
                coordinate.latitude
            );
            Ok(coordinate)
        }
        None => {
            log::error!("❌ [API] Geocoding sin longitude/latitude");
            Err(SearchError::LocationNotFound)
        }
    }
}

pub fn parse_routes_body(body: &str) -> Result<RoutesResponse, SearchError> {
    let response: RoutesResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::RouteFetchFailed(format!("Parse error: {}", e)))?;

    if let Some(error) = &response.error {
        log::warn!("⚠️ [API] Backend sin rutas: {}", error);
        return Err(SearchError::NoRoutes);
    }

    if response.routes.is_empty() {
        log::warn!("⚠️ [API] Lista de rutas vacía");
        return Err(SearchError::NoRoutes);
    }

    log::info!("✅ [API] {} rutas recibidas", response.routes.len());
    Ok(response)
}
