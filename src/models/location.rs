//! Modelo de LocationData
//!
//! Historial de posiciones de un activo. Las filas son inmutables una
//! vez escritas; el historial es append-only por activo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::geo::Point;

/// Registro histórico de posición - mapea a la tabla location_history
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LocationData {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    /// Momento en que se tomó la posición
    pub recorded_at: DateTime<Utc>,
    /// Momento en que se reportó la fila al sistema
    pub created_at: DateTime<Utc>,
}

impl LocationData {
    pub fn position(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }
}
