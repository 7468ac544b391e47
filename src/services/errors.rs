// ============================================================================
// SEARCH ERRORS - Taxonomía de fallos de una búsqueda
// ============================================================================
// Ningún error se reintenta: todos terminan el intento actual.
// ============================================================================

/// Error de una búsqueda de rutas
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Origen o destino vacío (no se hace ninguna llamada de red)
    MissingInput,
    /// Geocodificación fallida: lugar inexistente o error de transporte
    LocationNotFound,
    /// El backend respondió con `error` o con una lista vacía
    NoRoutes,
    /// Fallo de red o JSON inválido al pedir rutas
    RouteFetchFailed(String),
    /// Cualquier otro fallo durante el flujo (p.ej. el mapa rechazó una capa)
    Unexpected(String),
}

impl SearchError {
    /// Texto que ve el usuario en el alert
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::MissingInput => "Please enter both starting point and destination",
            SearchError::LocationNotFound => "Location not found",
            SearchError::NoRoutes => "No routes found",
            SearchError::RouteFetchFailed(_) => {
                "An error occurred while fetching routes. Please try again."
            }
            SearchError::Unexpected(_) => "An error occurred while finding routes. Please try again.",
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::MissingInput => write!(f, "Missing start or destination"),
            SearchError::LocationNotFound => write!(f, "Location not found"),
            SearchError::NoRoutes => write!(f, "No routes found"),
            SearchError::RouteFetchFailed(msg) => write!(f, "Route fetch failed: {}", msg),
            SearchError::Unexpected(msg) => write!(f, "Unexpected error: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<crate::maps::MapError> for SearchError {
    fn from(err: crate::maps::MapError) -> Self {
        SearchError::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::MapError;

    #[test]
    fn user_messages_hide_details() {
        let err = SearchError::RouteFetchFailed("connection refused".to_string());
        assert_eq!(
            err.user_message(),
            "An error occurred while fetching routes. Please try again."
        );
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn map_errors_become_unexpected() {
        let err: SearchError = MapError::Js("style is not done loading".to_string()).into();
        assert!(matches!(err, SearchError::Unexpected(ref m) if m.contains("style is not done loading")));
        assert_eq!(err.user_message(), "An error occurred while finding routes. Please try again.");
    }
}
