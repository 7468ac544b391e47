// ============================================================================
// INCREMENTAL UPDATES - Actualizar solo lo que cambia (sin re-render)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{get_attribute, set_class_name};
use crate::viewmodels::RouteCardList;

/// Re-aplicar clases `active`/`best` a las cards ya pintadas
pub fn update_card_selection(container: &Element, cards: &RouteCardList) -> Result<(), JsValue> {
    let nodes = container.query_selector_all(".route-card")?;

    for i in 0..nodes.length() {
        let Some(card_el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(id) = get_attribute(&card_el, "data-route-id") else {
            continue;
        };
        if let Some(card) = cards.cards().iter().find(|c| c.id == id) {
            set_class_name(&card_el, &cards.class_for(card));
        }
    }

    log::info!("✅ [CARDS] Selección actualizada: {:?}", cards.active_id());
    Ok(())
}
