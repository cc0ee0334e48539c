//! Modelo de Asset
//!
//! Este módulo contiene el struct Asset que mapea a la tabla assets.
//! Un activo es una entidad física rastreada (vehículo o persona) con
//! su última posición reportada desnormalizada en la propia fila.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::geo::Point;

/// Asset principal - mapea exactamente a la tabla assets
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Categoría abierta basada en string, p.ej. "TRUCK", "SALESPERSON"
    pub asset_type: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Timestamp de la última posición reportada. Invariante: igual al
    /// registro más reciente de location_history para este activo.
    pub last_reported_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Asset {
    /// Última posición reportada del activo
    pub fn last_reported_position(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }
}
