//! Servicio de creación de activos
//!
//! Alta de activos con su posición inicial, reporte de nuevas posiciones
//! y el seeder de datos de demo.

use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::asset_dto::{AssetCreatedResponse, CreateAssetRequest, LocationUpdateRequest};
use crate::models::asset::Asset;
use crate::repositories::asset_repository::AssetRepository;
use crate::utils::errors::{asset_not_found_error, AppError};
use crate::utils::validation::datetime_from_epoch;

/// Coordenada base del seeder; las posiciones de demo se generan con
/// jitter alrededor de este punto
const SEED_BASE_LATITUDE: f64 = 12.9716;
const SEED_BASE_LONGITUDE: f64 = 77.5946;

pub struct AssetCreationService {
    assets: AssetRepository,
}

impl AssetCreationService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            assets: AssetRepository::new(pool),
        }
    }

    /// Crear un activo nuevo con su posición inicial
    pub async fn create_asset(
        &self,
        request: CreateAssetRequest,
    ) -> Result<AssetCreatedResponse, AppError> {
        request.validate()?;

        let recorded_at = datetime_from_epoch(request.location.timestamp).map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid location timestamp: {}",
                request.location.timestamp
            ))
        })?;

        let asset = self
            .assets
            .create_with_location(
                request.name,
                request.description,
                request.asset_type,
                request.location.location.latitude,
                request.location.location.longitude,
                recorded_at,
            )
            .await?;

        log::info!("Asset created [{}] type [{}]", asset.id, asset.asset_type);

        Ok(AssetCreatedResponse { id: asset.id })
    }

    /// Reportar una nueva posición de un activo existente
    pub async fn update_asset_location(
        &self,
        asset_id: Uuid,
        request: LocationUpdateRequest,
    ) -> Result<Asset, AppError> {
        request.validate()?;

        let recorded_at = datetime_from_epoch(request.location.timestamp).map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid location timestamp: {}",
                request.location.timestamp
            ))
        })?;

        let asset = self
            .assets
            .update_location(
                asset_id,
                request.location.location.latitude,
                request.location.location.longitude,
                recorded_at,
            )
            .await?
            .ok_or_else(|| asset_not_found_error(asset_id))?;

        log::info!("Location updated for asset [{}]", asset_id);

        Ok(asset)
    }

    /// Crear activos de demo con nombres y posiciones aleatorias,
    /// repartidos entre camiones y vendedores. Solo para desarrollo.
    pub async fn seed_demo_assets(&self, count: u32) -> Result<Vec<Uuid>, AppError> {
        let mut ids = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let demo = random_demo_asset();
            let asset = self
                .assets
                .create_with_location(
                    demo.name,
                    demo.description,
                    demo.asset_type,
                    demo.latitude,
                    demo.longitude,
                    chrono::Utc::now(),
                )
                .await?;
            ids.push(asset.id);
        }

        log::info!("Seeded [{}] demo assets", ids.len());

        Ok(ids)
    }
}

/// Datos generados para un activo de demo
#[derive(Debug)]
pub struct DemoAsset {
    pub name: String,
    pub description: String,
    pub asset_type: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Generar un activo de demo; el rng no cruza ningún await
pub fn random_demo_asset() -> DemoAsset {
    let mut rng = rand::thread_rng();

    let name: String = (0..10)
        .map(|_| rng.gen_range(b'A'..=b'Z') as char)
        .collect();

    let asset_type = if rng.gen_bool(0.5) {
        "TRUCK"
    } else {
        "SALESPERSON"
    };

    DemoAsset {
        description: format!("Demo asset {}", name),
        name,
        asset_type: asset_type.to_string(),
        latitude: SEED_BASE_LATITUDE + rng.gen_range(-0.5..0.5),
        longitude: SEED_BASE_LONGITUDE + rng.gen_range(-0.5..0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_demo_asset_shape() {
        for _ in 0..50 {
            let demo = random_demo_asset();
            assert_eq!(demo.name.len(), 10);
            assert!(demo.name.chars().all(|c| c.is_ascii_uppercase()));
            assert!(demo.asset_type == "TRUCK" || demo.asset_type == "SALESPERSON");
            assert!((-90.0..=90.0).contains(&demo.latitude));
            assert!((-180.0..=180.0).contains(&demo.longitude));
        }
    }
}
