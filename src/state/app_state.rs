// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::maps::MapLibreSurface;
use crate::services::ApiClient;
use crate::viewmodels::SearchViewModel;

/// Estado compartido entre handlers (clonar es barato: solo Rc)
#[derive(Clone)]
pub struct AppState {
    pub search: Rc<RefCell<SearchViewModel<MapLibreSurface>>>,
    pub api: ApiClient,
}

impl AppState {
    pub fn new(surface: MapLibreSurface) -> Self {
        Self {
            search: Rc::new(RefCell::new(SearchViewModel::new(surface))),
            api: ApiClient::new(),
        }
    }
}
