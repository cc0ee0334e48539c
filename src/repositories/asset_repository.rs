//! Repositorio de activos
//!
//! Acceso a la tabla assets: búsquedas, los cuatro listados filtrados
//! acotados por límite, el export y las escrituras transaccionales que
//! mantienen la posición desnormalizada en sincronía con el historial.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::asset_dto::AssetExportData;
use crate::models::asset::Asset;
use crate::utils::errors::AppError;

pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear un activo junto con su primer registro de historial.
    /// Ambas escrituras van en una transacción: la última posición
    /// reportada debe igualar al registro más reciente del historial.
    pub async fn create_with_location(
        &self,
        name: String,
        description: String,
        asset_type: String,
        latitude: f64,
        longitude: f64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Asset, AppError> {
        let asset_id = Uuid::new_v4();
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let asset = sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (id, name, description, asset_type, latitude, longitude, last_reported_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING *
            "#,
        )
        .bind(asset_id)
        .bind(name)
        .bind(description)
        .bind(asset_type)
        .bind(latitude)
        .bind(longitude)
        .bind(recorded_at)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO location_history (id, asset_id, latitude, longitude, recorded_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(asset_id)
        .bind(latitude)
        .bind(longitude)
        .bind(recorded_at)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(asset)
    }

    /// Registrar una nueva posición: agrega al historial y refresca la
    /// posición desnormalizada del activo. Devuelve None si el id no
    /// corresponde a ningún activo.
    pub async fn update_location(
        &self,
        asset_id: Uuid,
        latitude: f64,
        longitude: f64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Option<Asset>, AppError> {
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let asset = sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets
            SET latitude = $2, longitude = $3, last_reported_at = $4, updated_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(asset_id)
        .bind(latitude)
        .bind(longitude)
        .bind(recorded_at)
        .bind(now)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(asset) = asset else {
            return Ok(None);
        };

        sqlx::query(
            r#"
            INSERT INTO location_history (id, asset_id, latitude, longitude, recorded_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(asset_id)
        .bind(latitude)
        .bind(longitude)
        .bind(recorded_at)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(asset))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Asset>, AppError> {
        let asset = sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(asset)
    }

    /// Todos los activos en orden de inserción, acotados por límite
    pub async fn find_assets(&self, limit: i64) -> Result<Vec<Asset>, AppError> {
        let assets = sqlx::query_as::<_, Asset>(
            "SELECT * FROM assets ORDER BY created_at ASC, id LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(assets)
    }

    pub async fn filter_assets_by_type(
        &self,
        asset_type: &str,
        limit: i64,
    ) -> Result<Vec<Asset>, AppError> {
        let assets = sqlx::query_as::<_, Asset>(
            r#"
            SELECT * FROM assets
            WHERE asset_type = $1
            ORDER BY created_at ASC, id
            LIMIT $2
            "#,
        )
        .bind(asset_type)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(assets)
    }

    /// Activos cuya última posición reportada cae dentro de la ventana
    pub async fn filter_assets_by_time(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Asset>, AppError> {
        let assets = sqlx::query_as::<_, Asset>(
            r#"
            SELECT * FROM assets
            WHERE last_reported_at BETWEEN $1 AND $2
            ORDER BY created_at ASC, id
            LIMIT $3
            "#,
        )
        .bind(start)
        .bind(end)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(assets)
    }

    pub async fn filter_assets_by_type_and_time(
        &self,
        asset_type: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Asset>, AppError> {
        let assets = sqlx::query_as::<_, Asset>(
            r#"
            SELECT * FROM assets
            WHERE asset_type = $1 AND last_reported_at BETWEEN $2 AND $3
            ORDER BY created_at ASC, id
            LIMIT $4
            "#,
        )
        .bind(asset_type)
        .bind(start)
        .bind(end)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(assets)
    }

    /// Query fija de export: proyección desnormalizada activo + historial,
    /// una fila por registro de posición. Sin parámetros.
    pub async fn export_assets(&self) -> Result<Vec<AssetExportData>, AppError> {
        let rows = sqlx::query_as::<_, AssetExportData>(
            r#"
            SELECT a.id AS asset_id,
                   a.name,
                   a.asset_type,
                   h.latitude,
                   h.longitude,
                   h.recorded_at
            FROM assets a
            JOIN location_history h ON h.asset_id = a.id
            ORDER BY a.created_at ASC, h.recorded_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
