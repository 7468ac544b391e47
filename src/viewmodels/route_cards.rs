// ============================================================================
// ROUTE CARDS VIEWMODEL - Descriptores declarativos de las cards de rutas
// ============================================================================
// Una card por ruta, ligada 1:1 al id de capa. La vista solo pinta
// descriptores; la selección vive aquí y se refleja en el mapa.
// ============================================================================

use crate::models::{Route, TrafficLevel};
use crate::utils::constants::{route_color, route_layer_id};

pub const BEST_ROUTE_REASON: &str = "✓ Fastest route with best traffic conditions";

/// Datos que la vista necesita para pintar una card
#[derive(Clone, Debug, PartialEq)]
pub struct RouteCardDescriptor {
    pub id: String,
    pub index: usize,
    pub rank_label: String,
    pub is_best: bool,
    pub color: &'static str,
    pub duration_min: f64,
    pub distance_km: f64,
    pub avg_speed: f64,
    pub traffic: TrafficLevel,
    pub reason: Option<&'static str>,
}

impl RouteCardDescriptor {
    pub fn from_route(index: usize, route: &Route) -> Self {
        let is_best = index == 0;
        Self {
            id: route_layer_id(index),
            index,
            rank_label: if is_best {
                "RECOMMENDED".to_string()
            } else {
                format!("Route {}", index + 1)
            },
            is_best,
            color: route_color(index),
            duration_min: route.duration_min,
            distance_km: route.distance_km,
            avg_speed: route.avg_speed,
            traffic: route.traffic_level(),
            reason: is_best.then_some(BEST_ROUTE_REASON),
        }
    }

    pub fn duration_text(&self) -> String {
        format!("{} mins", self.duration_min)
    }

    pub fn distance_text(&self) -> String {
        format!("{} km", self.distance_km)
    }

    pub fn avg_speed_text(&self) -> String {
        format!("{} km/h", self.avg_speed)
    }
}

/// Lista de cards + card activa (exclusiva)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteCardList {
    cards: Vec<RouteCardDescriptor>,
    active: Option<String>,
}

impl RouteCardList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruir todas las cards; la primera queda activa
    pub fn render(&mut self, routes: &[Route]) {
        self.cards = routes
            .iter()
            .enumerate()
            .map(|(index, route)| RouteCardDescriptor::from_route(index, route))
            .collect();
        self.active = self.cards.first().map(|c| c.id.clone());

        log::info!("🃏 [CARDS] {} cards generadas", self.cards.len());
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.active = None;
    }

    /// Activar la card `id` y desactivar el resto. Ids desconocidos se ignoran.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.cards.iter().any(|c| c.id == id) {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    pub fn cards(&self) -> &[RouteCardDescriptor] {
        &self.cards
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Clases CSS de una card: `route-card [best] [active]`
    pub fn class_for(&self, card: &RouteCardDescriptor) -> String {
        let mut class = String::from("route-card");
        if card.is_best {
            class.push_str(" best");
        }
        if self.is_active(&card.id) {
            class.push_str(" active");
        }
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::memory::sample_routes;

    #[test]
    fn three_routes_give_three_ranked_cards() {
        let mut list = RouteCardList::new();
        list.render(&sample_routes(3));

        let labels: Vec<&str> = list.cards().iter().map(|c| c.rank_label.as_str()).collect();
        assert_eq!(labels, vec!["RECOMMENDED", "Route 2", "Route 3"]);
        assert_eq!(list.class_for(&list.cards()[0]), "route-card best active");
        assert_eq!(list.class_for(&list.cards()[1]), "route-card");
    }

    #[test]
    fn only_best_card_has_reason() {
        let mut list = RouteCardList::new();
        list.render(&sample_routes(3));

        assert_eq!(list.cards()[0].reason, Some(BEST_ROUTE_REASON));
        assert!(list.cards()[1..].iter().all(|c| c.reason.is_none()));
    }

    #[test]
    fn selecting_moves_active_but_keeps_best() {
        let mut list = RouteCardList::new();
        list.render(&sample_routes(3));

        assert!(list.select("route2"));
        assert_eq!(list.active_id(), Some("route2"));
        assert_eq!(list.class_for(&list.cards()[0]), "route-card best");
        assert_eq!(list.class_for(&list.cards()[2]), "route-card active");
    }

    #[test]
    fn unknown_card_is_ignored() {
        let mut list = RouteCardList::new();
        list.render(&sample_routes(2));

        assert!(!list.select("route5"));
        assert_eq!(list.active_id(), Some("route0"));
    }

    #[test]
    fn card_fields_come_from_route() {
        let mut routes = sample_routes(1);
        routes[0].duration_min = 24.5;
        routes[0].distance_km = 18.0;
        routes[0].avg_speed = 44.1;

        let card = RouteCardDescriptor::from_route(0, &routes[0]);
        assert_eq!(card.duration_text(), "24.5 mins");
        assert_eq!(card.distance_text(), "18 km");
        assert_eq!(card.avg_speed_text(), "44.1 km/h");
        // 18 km en 24.5 min ≈ 44 km/h
        assert_eq!(card.traffic, TrafficLevel::Moderate);
        assert_eq!(card.color, "#4caf50");
    }

    #[test]
    fn traffic_label_can_differ_from_backend_speed() {
        let mut routes = sample_routes(1);
        routes[0].duration_min = 60.0;
        routes[0].distance_km = 20.0;
        routes[0].avg_speed = 75.0;

        let card = RouteCardDescriptor::from_route(0, &routes[0]);
        assert_eq!(card.traffic, TrafficLevel::Heavy);
        assert_eq!(card.avg_speed_text(), "75 km/h");
    }

    #[test]
    fn empty_render_leaves_no_active_card() {
        let mut list = RouteCardList::new();
        list.render(&sample_routes(2));
        list.render(&[]);
        assert!(list.cards().is_empty());
        assert_eq!(list.active_id(), None);
    }
}
