pub mod coordinate;
pub mod route;
pub mod traffic;

pub use coordinate::Coordinate;
pub use route::{GeocodeResponse, Recommendation, Route, RoutesResponse};
pub use traffic::TrafficLevel;
