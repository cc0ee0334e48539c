//! Repositorio de historial de posiciones
//!
//! Lecturas sobre la tabla location_history. Las escrituras van por el
//! repositorio de activos para mantener la transacción con la posición
//! desnormalizada.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::location::LocationData;
use crate::utils::errors::AppError;

pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Historial de un activo dentro de la ventana, más reciente primero
    pub async fn find_history_between(
        &self,
        asset_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<LocationData>, AppError> {
        let history = sqlx::query_as::<_, LocationData>(
            r#"
            SELECT * FROM location_history
            WHERE asset_id = $1 AND recorded_at BETWEEN $2 AND $3
            ORDER BY recorded_at DESC
            "#,
        )
        .bind(asset_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(history)
    }
}
