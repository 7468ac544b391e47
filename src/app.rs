// ============================================================================
// APP - Controlador de la página: inputs, swap, búsqueda y click en cards
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{
    alert, closest_attribute, input_value, on_click, query_selector, require_element,
    set_input_value, update_card_selection,
};
use crate::maps::{MapConfig, MapLibreSurface};
use crate::services::SearchError;
use crate::state::AppState;
use crate::views::render_results_panel;

const START_INPUT: &str = "start";
const END_INPUT: &str = "end";

/// Aplicación principal
pub struct App {
    state: AppState,
    routes_panel: Element,
}

impl App {
    /// Crear mapa, estado y listeners (una sola vez por página)
    pub fn new() -> Result<Self, JsValue> {
        let routes_panel = query_selector(".routes")?
            .ok_or_else(|| JsValue::from_str("No .routes element found"))?;

        let surface = MapLibreSurface::new(&MapConfig::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let state = AppState::new(surface);

        let app = Self { state, routes_panel };
        app.bind_swap()?;
        app.bind_find_routes()?;
        app.bind_card_clicks()?;
        Ok(app)
    }

    /// Pintar el panel de resultados con el estado actual
    pub fn render(&self) -> Result<(), JsValue> {
        render_results_panel(&self.routes_panel, &self.state.search.borrow())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn bind_swap(&self) -> Result<(), JsValue> {
        on_click(&require_element("swap")?, move |_| swap_inputs())
    }

    fn bind_find_routes(&self) -> Result<(), JsValue> {
        let state = self.state.clone();
        let panel = self.routes_panel.clone();

        on_click(&require_element("findRoutes")?, move |_| {
            let start = input_value(START_INPUT);
            let end = input_value(END_INPUT);
            let state = state.clone();
            let panel = panel.clone();
            // Sin guardia contra búsquedas solapadas: cada una limpia las capas de la anterior
            wasm_bindgen_futures::spawn_local(async move {
                run_search(state, panel, start, end).await;
            });
        })
    }

    /// Un solo listener en `.routes`: resuelve la card por `data-route-id`
    fn bind_card_clicks(&self) -> Result<(), JsValue> {
        let state = self.state.clone();
        let panel = self.routes_panel.clone();

        on_click(&self.routes_panel, move |event: MouseEvent| {
            let Some(id) = closest_attribute(&event, ".route-card", "data-route-id") else {
                return;
            };

            let selected = state.search.borrow_mut().select_route(&id);
            match selected {
                Ok(true) => {
                    if let Err(e) = update_card_selection(&panel, state.search.borrow().cards()) {
                        log::error!("❌ [CARDS] Error actualizando selección: {:?}", e);
                    }
                }
                Ok(false) => {}
                Err(e) => log::error!("❌ [MAP] Error seleccionando {}: {}", id, e),
            }
        })
    }
}

/// Intercambiar los textos de origen y destino
pub fn swap_inputs() {
    let start = input_value(START_INPUT);
    let end = input_value(END_INPUT);
    set_input_value(START_INPUT, &end);
    set_input_value(END_INPUT, &start);
}

/// Búsqueda completa. Todo error termina aquí: alert + panel según el tipo.
async fn run_search(state: AppState, panel: Element, start: String, end: String) {
    if let Err(err) = search_flow(&state, &panel, &start, &end).await {
        let message = state.search.borrow_mut().fail(&err);
        alert(message);
    }

    if let Err(e) = render_results_panel(&panel, &state.search.borrow()) {
        log::error!("❌ [SEARCH] Error pintando resultados: {:?}", e);
    }
}

async fn search_flow(
    state: &AppState,
    panel: &Element,
    start: &str,
    end: &str,
) -> Result<usize, SearchError> {
    let (start_place, end_place) = state.search.borrow_mut().begin_search(start, end)?;
    render(state, panel)?;

    // Secuencial: primero origen, después destino
    let start = state.api.geocode(&start_place).await;
    let end = state.api.geocode(&end_place).await;
    let (start, end) = state.search.borrow_mut().apply_geocoding(start, end)?;

    state.search.borrow_mut().prepare_route_fetch()?;
    render(state, panel)?;

    let routes = state.api.fetch_routes(start, end).await;
    let count = state.search.borrow_mut().apply_routes(routes)?;

    log::info!("✅ [SEARCH] {} rutas mostradas", count);
    Ok(count)
}

fn render(state: &AppState, panel: &Element) -> Result<(), SearchError> {
    render_results_panel(panel, &state.search.borrow())
        .map_err(|e| SearchError::Unexpected(format!("{:?}", e)))
}
