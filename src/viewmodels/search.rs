// ============================================================================
// SEARCH VIEWMODEL - Flujo de una búsqueda + estado del panel de resultados
// ============================================================================
// La red queda fuera: App hace los awaits y entrega aquí los resultados.
// Orden: begin_search → apply_geocoding → prepare_route_fetch → apply_routes.
// Cualquier Err pasa por fail(), que decide el panel y el texto del alert.
// ============================================================================

use crate::maps::{MapSession, MapSurface};
use crate::models::{Coordinate, RoutesResponse};
use crate::services::SearchError;
use crate::viewmodels::route_cards::RouteCardList;

/// Estado del panel `.routes`
#[derive(Clone, Debug, PartialEq)]
pub enum ResultsPanel {
    /// Solo el título "Available Routes"
    Idle,
    Loading,
    NoRoutes,
    Routes { summary: Option<String> },
}

pub struct SearchViewModel<S: MapSurface> {
    map: MapSession<S>,
    cards: RouteCardList,
    panel: ResultsPanel,
}

impl<S: MapSurface> SearchViewModel<S> {
    pub fn new(surface: S) -> Self {
        Self {
            map: MapSession::new(surface),
            cards: RouteCardList::new(),
            panel: ResultsPanel::Idle,
        }
    }

    pub fn map(&self) -> &MapSession<S> {
        &self.map
    }

    pub fn cards(&self) -> &RouteCardList {
        &self.cards
    }

    pub fn panel(&self) -> &ResultsPanel {
        &self.panel
    }

    /// Validar entradas y pasar el panel a "cargando"
    pub fn begin_search(&mut self, start: &str, end: &str) -> Result<(String, String), SearchError> {
        let places = validate_places(start, end)?;
        self.panel = ResultsPanel::Loading;
        log::info!("🔎 [SEARCH] '{}' → '{}'", places.0, places.1);
        Ok(places)
    }

    /// Ambos lugares deben existir; entonces se colocan los marcadores
    pub fn apply_geocoding(
        &mut self,
        start: Result<Coordinate, SearchError>,
        end: Result<Coordinate, SearchError>,
    ) -> Result<(Coordinate, Coordinate), SearchError> {
        let (start, end) = match (start, end) {
            (Ok(start), Ok(end)) => (start, end),
            _ => return Err(SearchError::LocationNotFound),
        };

        self.map.place_markers(start, end)?;
        Ok((start, end))
    }

    /// Limpiar rutas y cards anteriores antes de pedir las nuevas
    pub fn prepare_route_fetch(&mut self) -> Result<(), SearchError> {
        self.map.reset_routes()?;
        self.cards.clear();
        self.panel = ResultsPanel::Idle;
        Ok(())
    }

    /// Pintar capas y cards. Devuelve cuántas rutas se mostraron.
    pub fn apply_routes(
        &mut self,
        result: Result<RoutesResponse, SearchError>,
    ) -> Result<usize, SearchError> {
        let response = result?;
        if response.routes.is_empty() {
            return Err(SearchError::NoRoutes);
        }

        self.map.render_routes(&response.routes)?;
        self.cards.render(&response.routes);

        let summary = response
            .recommendation
            .as_ref()
            .filter(|r| r.time_saved > 0.0 && response.routes.len() > 1)
            .map(|r| format!("Saves {} min vs. the next best route", r.time_saved));
        self.panel = ResultsPanel::Routes { summary };

        Ok(response.routes.len())
    }

    /// Click en una card: mapa y cards cambian juntos o no cambian
    pub fn select_route(&mut self, id: &str) -> Result<bool, SearchError> {
        if !self.cards.cards().iter().any(|c| c.id == id) {
            return Ok(false);
        }
        if !self.map.select_route(id)? {
            return Ok(false);
        }
        Ok(self.cards.select(id))
    }

    /// Cerrar un intento fallido: ajusta el panel y devuelve el texto del alert
    pub fn fail(&mut self, err: &SearchError) -> &'static str {
        log::error!("❌ [SEARCH] {}", err);
        match err {
            SearchError::MissingInput => {}
            SearchError::LocationNotFound => self.panel = ResultsPanel::Idle,
            SearchError::NoRoutes | SearchError::RouteFetchFailed(_) => {
                self.panel = ResultsPanel::NoRoutes
            }
            SearchError::Unexpected(_) => {
                // Capas a medio crear no deben quedar sin su card
                if let Err(e) = self.map.reset_routes() {
                    log::warn!("⚠️ [SEARCH] No se pudieron limpiar las rutas: {}", e);
                }
                self.cards.clear();
                self.panel = ResultsPanel::Idle;
            }
        }
        err.user_message()
    }
}

/// Recortar espacios; ninguno de los dos puede quedar vacío
pub fn validate_places(start: &str, end: &str) -> Result<(String, String), SearchError> {
    let start = start.trim();
    let end = end.trim();
    if start.is_empty() || end.is_empty() {
        return Err(SearchError::MissingInput);
    }
    Ok((start.to_string(), end.to_string()))
}
