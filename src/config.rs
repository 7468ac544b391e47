use serde::{Deserialize, Serialize};

/// Configuración fijada en tiempo de compilación (ver build.rs / .env)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub maptiler_key: String,
    pub enable_logging: bool,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:5000".to_string(),
            maptiler_key: String::new(),
            enable_logging: true,
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 22.5726, // Kolkata
            default_center_lng: 88.3639,
            default_zoom: 11.0,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or("http://127.0.0.1:5000").to_string(),
            maptiler_key: option_env!("MAPTILER_KEY")
                .unwrap_or("").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("22.5726").parse().unwrap_or(22.5726),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("88.3639").parse().unwrap_or(88.3639),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("11").parse().unwrap_or(11.0),
            },
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Estilo "streets" de MapTiler con la key configurada
    pub fn map_style_url(&self) -> String {
        format!(
            "https://api.maptiler.com/maps/streets/style.json?key={}",
            self.maptiler_key
        )
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
