pub mod api_client;
pub mod errors;

pub use api_client::*;
pub use errors::SearchError;
