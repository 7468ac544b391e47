// ============================================================================
// ROUTE VIEWER - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI (búsqueda, cards)
// - Services: SOLO comunicación API
// - Maps: Sesión de rutas sobre MapLibre
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod models;
pub mod services;
pub mod viewmodels;
pub mod maps;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod config;
pub mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

// Instancia única de App durante toda la vida de la página
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Route Viewer - backend {}", CONFIG.backend_url());

    let app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Intercambiar origen/destino (llamable desde JavaScript)
#[wasm_bindgen]
pub fn swap_places() {
    app::swap_inputs();
}

/// Seleccionar una ruta por id de capa (llamable desde JavaScript)
#[wasm_bindgen]
pub fn select_route(id: &str) -> bool {
    APP.with(|app_cell| {
        let guard = app_cell.borrow();
        let Some(app) = guard.as_ref() else {
            log::warn!("⚠️ App no está inicializada");
            return false;
        };

        let result = app.state().search.borrow_mut().select_route(id);
        match result {
            Ok(true) => {
                if let Err(e) = app.render() {
                    log::error!("❌ Error re-renderizando: {:?}", e);
                }
                true
            }
            Ok(false) => false,
            Err(e) => {
                log::error!("❌ Error seleccionando {}: {}", id, e);
                false
            }
        }
    })
}
