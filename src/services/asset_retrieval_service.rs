//! Servicio de consulta de activos
//!
//! El motor de consultas del sistema: historial de 24 horas con fallback
//! de centroide, despacho de los cuatro modos de filtro y export con
//! fila centinela. Las operaciones son de solo lectura y deterministas;
//! los fallos son resultados de validación, nunca se reintentan.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::asset_dto::{AssetDataResponse, AssetExportData, AssetHistoryResponse};
use crate::models::asset::Asset;
use crate::models::filter::AssetFilter;
use crate::models::location::LocationData;
use crate::repositories::asset_repository::AssetRepository;
use crate::repositories::location_repository::LocationRepository;
use crate::utils::errors::{asset_not_found_error, AppError};
use crate::utils::geo::{centroid, Point};

pub struct AssetRetrievalService {
    assets: AssetRepository,
    locations: LocationRepository,
}

impl AssetRetrievalService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            assets: AssetRepository::new(pool.clone()),
            locations: LocationRepository::new(pool),
        }
    }

    /// Historial de las últimas 24 horas de un activo, más reciente
    /// primero, junto con el centroide del recorrido.
    pub async fn get_history_for_asset(
        &self,
        asset_id: Uuid,
    ) -> Result<AssetHistoryResponse, AppError> {
        let asset = self
            .assets
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| asset_not_found_error(asset_id))?;

        // ambos límites de la ventana comparten el mismo "now"
        let now = Utc::now();
        let window_start = now - Duration::hours(24);

        let history = self
            .locations
            .find_history_between(asset_id, window_start, now)
            .await?;

        log::info!(
            "last 24h history for asset [{}]: [{}] records",
            asset_id,
            history.len()
        );

        compose_history_response(asset, history)
    }

    pub async fn get_asset_for_id(&self, asset_id: Uuid) -> Result<Asset, AppError> {
        self.assets
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| asset_not_found_error(asset_id))
    }

    /// Listado de activos según el modo de filtro clasificado, acotado
    /// por `limit`, con el centroide del conjunto resultado.
    pub async fn get_assets_filtered_by(
        &self,
        asset_type: Option<String>,
        start: Option<i64>,
        end: Option<i64>,
        limit: i64,
    ) -> Result<AssetDataResponse, AppError> {
        let filter = AssetFilter::classify(asset_type, start, end)?;

        let assets = match &filter {
            AssetFilter::None => {
                log::info!("No filters defined, getting all assets");
                self.assets.find_assets(limit).await?
            }
            AssetFilter::ByType(asset_type) => {
                log::info!("Type filter defined [{}]", asset_type);
                self.assets.filter_assets_by_type(asset_type, limit).await?
            }
            AssetFilter::ByTime(start, end) => {
                log::info!("Time filter defined [{} - {}]", start, end);
                self.assets.filter_assets_by_time(*start, *end, limit).await?
            }
            AssetFilter::ByTypeAndTime(asset_type, start, end) => {
                log::info!(
                    "Both type and time filter defined [{}] [{} - {}]",
                    asset_type,
                    start,
                    end
                );
                self.assets
                    .filter_assets_by_type_and_time(asset_type, *start, *end, limit)
                    .await?
            }
        };

        log::info!("assets found [{}]", assets.len());

        compose_asset_data_response(assets)
    }

    /// Export completo de datos; la respuesta nunca es vacía.
    pub async fn export_data(&self) -> Result<Vec<AssetExportData>, AppError> {
        let rows = self.assets.export_assets().await?;
        log::info!("export rows [{}]", rows.len());
        Ok(ensure_non_empty_export(rows))
    }
}

/// Compone la respuesta de historial. Sin historial en la ventana, el
/// centroide degrada a la última posición reportada del activo; la
/// ausencia de historial reciente nunca hace fallar el cálculo.
pub fn compose_history_response(
    asset: Asset,
    history: Vec<LocationData>,
) -> Result<AssetHistoryResponse, AppError> {
    let centroid_point = if history.is_empty() {
        asset.last_reported_position()
    } else {
        let positions: Vec<Point> = history.iter().map(LocationData::position).collect();
        centroid(&positions)?
    };

    Ok(AssetHistoryResponse {
        asset: asset.into(),
        history: history.into_iter().map(Into::into).collect(),
        centroid: centroid_point,
    })
}

/// Centroide del conjunto resultado; (0,0) para un conjunto vacío, sin
/// invocar el cálculo.
pub fn compose_asset_data_response(assets: Vec<Asset>) -> Result<AssetDataResponse, AppError> {
    let centroid_point = if assets.is_empty() {
        Point::origin()
    } else {
        let positions: Vec<Point> = assets.iter().map(Asset::last_reported_position).collect();
        centroid(&positions)?
    };

    Ok(AssetDataResponse {
        centroid: centroid_point,
        assets: assets.into_iter().map(Into::into).collect(),
    })
}

/// Garantiza la respuesta no vacía del export: cero filas se sustituyen
/// por exactamente una fila centinela con campos por defecto.
pub fn ensure_non_empty_export(rows: Vec<AssetExportData>) -> Vec<AssetExportData> {
    if rows.is_empty() {
        log::info!("Exporting with empty data");
        return vec![AssetExportData::default()];
    }
    rows
}
