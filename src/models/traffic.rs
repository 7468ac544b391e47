// ============================================================================
// TRAFFIC - Estimación de tráfico a partir de la velocidad media
// ============================================================================

/// Nivel de tráfico mostrado en cada card
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TrafficLevel {
    Low,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    /// Velocidad media = distancia * 60 / duración, en km/h.
    /// Multiplicar antes de dividir deja exactos los umbrales (5.5 km en 11 min = 30).
    /// > 50 → Low, > 30 → Moderate, resto → Heavy.
    ///
    /// Es una estimación de presentación: no usa el `avg_speed` del backend.
    pub fn estimate(duration_min: f64, distance_km: f64) -> Self {
        let speed = distance_km * 60.0 / duration_min;
        Self::from_speed(speed)
    }

    /// NaN cae en Heavy porque ninguna comparación se cumple.
    pub fn from_speed(speed_kmh: f64) -> Self {
        if speed_kmh > 50.0 {
            TrafficLevel::Low
        } else if speed_kmh > 30.0 {
            TrafficLevel::Moderate
        } else {
            TrafficLevel::Heavy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrafficLevel::Low => "Low",
            TrafficLevel::Moderate => "Moderate",
            TrafficLevel::Heavy => "Heavy",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            TrafficLevel::Low => "#4caf50",
            TrafficLevel::Moderate => "#ff9800",
            TrafficLevel::Heavy => "#f44336",
        }
    }
}

impl std::fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
