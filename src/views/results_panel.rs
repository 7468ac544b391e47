// ============================================================================
// RESULTS PANEL VIEW - Contenido del panel `.routes`
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::maps::MapSurface;
use crate::viewmodels::{ResultsPanel, SearchViewModel};
use crate::views::render_route_card;

const HEADING: &str = "Available Routes";

/// Re-render completo del panel según el estado de la búsqueda
pub fn render_results_panel<S: MapSurface>(
    container: &Element,
    search: &SearchViewModel<S>,
) -> Result<(), JsValue> {
    set_inner_html(container, "");

    match search.panel() {
        ResultsPanel::Loading => {
            append_child(container, &heading("Finding Routes...")?)?;
            append_child(container, &paragraph("Please wait...")?)?;
        }
        ResultsPanel::Idle => {
            append_child(container, &heading(HEADING)?)?;
        }
        ResultsPanel::NoRoutes => {
            append_child(container, &heading(HEADING)?)?;
            append_child(container, &paragraph("No routes found")?)?;
        }
        ResultsPanel::Routes { summary } => {
            append_child(container, &heading(HEADING)?)?;
            if let Some(summary) = summary {
                let el = ElementBuilder::new("p")?.class("routes-summary").text(summary).build();
                append_child(container, &el)?;
            }
            let cards = search.cards();
            for card in cards.cards() {
                append_child(container, &render_route_card(card, &cards.class_for(card))?)?;
            }
        }
    }
    Ok(())
}

fn heading(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("h3")?.text(text).build())
}

fn paragraph(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.text(text).build())
}
