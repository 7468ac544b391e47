use serde::{Deserialize, Serialize};

/// Par (longitud, latitud) en grados decimales
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Orden que espera MapLibre: [lng, lat]
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Caja [[oeste, sur], [este, norte]] que contiene ambos puntos
    pub fn bounds(a: Coordinate, b: Coordinate) -> [[f64; 2]; 2] {
        [
            [a.longitude.min(b.longitude), a.latitude.min(b.latitude)],
            [a.longitude.max(b.longitude), a.latitude.max(b.latitude)],
        ]
    }
}
