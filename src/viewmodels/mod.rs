pub mod route_cards;
pub mod search;

pub use route_cards::{RouteCardDescriptor, RouteCardList};
pub use search::{validate_places, ResultsPanel, SearchViewModel};
