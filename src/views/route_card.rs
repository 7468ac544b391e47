// ============================================================================
// ROUTE CARD VIEW - Pinta una card desde su descriptor (sin lógica)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::viewmodels::RouteCardDescriptor;

/// Renderizar una card. El click lo resuelve el listener del panel vía `data-route-id`.
pub fn render_route_card(card: &RouteCardDescriptor, class: &str) -> Result<Element, JsValue> {
    let badge_class = if card.is_best { "rank-badge best-badge" } else { "rank-badge" };

    let header = ElementBuilder::new("div")?
        .class("route-header")
        .child(ElementBuilder::new("span")?.class(badge_class).text(&card.rank_label).build())?
        .child(
            ElementBuilder::new("div")?
                .class("route-color-indicator")
                .attr("style", &format!("background-color: {}", card.color))?
                .build(),
        )?
        .build();

    let traffic_style = format!("color: {}; font-weight: bold;", card.traffic.color());
    let details = ElementBuilder::new("div")?
        .class("route-details")
        .child(detail_row("Time:", &card.duration_text(), None)?)?
        .child(detail_row("Distance:", &card.distance_text(), None)?)?
        .child(detail_row("Traffic:", card.traffic.label(), Some(&traffic_style))?)?
        .child(detail_row("Avg Speed:", &card.avg_speed_text(), None)?)?
        .build();

    let mut builder = ElementBuilder::new("div")?
        .class(class)
        .attr("data-route-id", &card.id)?
        .child(header)?
        .child(details)?;

    if let Some(reason) = card.reason {
        builder = builder.child(
            ElementBuilder::new("div")?
                .class("best-route-reason")
                .text(reason)
                .build(),
        )?;
    }

    Ok(builder.build())
}

fn detail_row(label: &str, value: &str, value_style: Option<&str>) -> Result<Element, JsValue> {
    let mut value_el = ElementBuilder::new("span")?.class("detail-value").text(value);
    if let Some(style) = value_style {
        value_el = value_el.attr("style", style)?;
    }

    Ok(ElementBuilder::new("div")?
        .class("detail-row")
        .child(ElementBuilder::new("span")?.class("detail-label").text(label).build())?
        .child(value_el.build())?
        .build())
}
