pub mod route_card;
pub mod results_panel;

pub use route_card::render_route_card;
pub use results_panel::render_results_panel;
